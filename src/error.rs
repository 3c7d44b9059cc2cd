use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors surfaced by the translation pipeline
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Bad client input: unknown language, blank text, empty batch, malformed body
    #[error("{0}")]
    InvalidInput(String),

    /// Deployment problem, e.g. no API key configured
    #[error("{0}")]
    Misconfiguration(String),

    /// Could not reach the inference API (connect failure or timeout)
    #[error("Error connecting to translation service: {0}")]
    UpstreamUnavailable(String),

    /// Inference API answered with a non-2xx status
    #[error("Translation service error ({status}): {body}")]
    UpstreamError { status: u16, body: String },

    #[error("Translation failed: {0}")]
    Unexpected(String),
}

impl TranslateError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TranslateError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            TranslateError::Misconfiguration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TranslateError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            TranslateError::UpstreamError { .. } => StatusCode::BAD_GATEWAY,
            TranslateError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short machine-readable tag used in error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            TranslateError::InvalidInput(_) => "invalid_input",
            TranslateError::Misconfiguration(_) => "misconfiguration",
            TranslateError::UpstreamUnavailable(_) => "upstream_unavailable",
            TranslateError::UpstreamError { .. } => "upstream_error",
            TranslateError::Unexpected(_) => "translation_failed",
        }
    }
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() || err.is_request() {
            TranslateError::UpstreamUnavailable(err.to_string())
        } else if let Some(status) = err.status() {
            TranslateError::UpstreamError {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            TranslateError::Unexpected(err.to_string())
        }
    }
}

impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{} ({}): {}", status, self.kind(), self);
        }

        let mut body = json!({
            "error": self.kind(),
            "detail": self.to_string(),
        });
        if let TranslateError::UpstreamError { status: upstream, .. } = &self {
            body["upstreamStatus"] = json!(upstream);
        }

        (status, Json(body)).into_response()
    }
}
