use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};
use tracing::warn;

use crate::error::TranslateError;
use crate::state::AppState;
use crate::translate::{
    BatchTranslationRequest, BatchTranslationResponse, LanguageEntry, TranslationRequest,
    TranslationResult,
};

pub const SERVICE_NAME: &str = "ParaBoda Translation API";
pub const SERVICE_DESCRIPTION: &str = "AI-powered translation service for Kenyan languages";

pub async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "description": SERVICE_DESCRIPTION,
        "model": state.config.translation.model,
        "endpoints": {
            "health": "/health",
            "languages": "/languages",
            "translate": "/translate",
            "batch_translate": "/translate/batch"
        }
    }))
}

/// Static health report; the inference API is not contacted
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model": state.config.translation.model,
        "supportedLanguages": state.catalog().len(),
        "apiKeyConfigured": state.api_key_configured(),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

pub async fn list_languages(State(state): State<AppState>) -> Json<Vec<LanguageEntry>> {
    Json(state.catalog().list_all().to_vec())
}

pub async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslationRequest>, JsonRejection>,
) -> Result<Json<TranslationResult>, TranslateError> {
    let Json(request) = payload.map_err(invalid_body)?;
    let result = state.pipeline.translate(&request).await?;
    Ok(Json(result))
}

pub async fn translate_batch(
    State(state): State<AppState>,
    payload: Result<Json<BatchTranslationRequest>, JsonRejection>,
) -> Result<Json<BatchTranslationResponse>, TranslateError> {
    let Json(request) = payload.map_err(invalid_body)?;
    let response = state.pipeline.translate_batch(&request).await?;
    Ok(Json(response))
}

fn invalid_body(rejection: JsonRejection) -> TranslateError {
    warn!("Rejected request body: {}", rejection.body_text());
    TranslateError::InvalidInput(rejection.body_text())
}
