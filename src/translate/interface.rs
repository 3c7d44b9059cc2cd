use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::TranslateError;

/// Confidence reported for text that went through the model
pub const MODEL_CONFIDENCE: f64 = 0.98;

/// Confidence reported for blank batch entries, which are never sent upstream
pub const BLANK_CONFIDENCE: f64 = 1.0;

/// Single-text translation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    #[serde(alias = "input_text")]
    pub input_text: String,
    /// Falls back to the configured default source language when omitted
    #[serde(default, alias = "source_language")]
    pub source_language: Option<String>,
    #[serde(alias = "target_language")]
    pub target_language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchTranslationRequest {
    pub texts: Vec<String>,
    #[serde(default, alias = "source_language")]
    pub source_language: Option<String>,
    #[serde(alias = "target_language")]
    pub target_language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchTranslationResponse {
    pub translations: Vec<TranslationResult>,
}

/// Anything that can turn one string into another language.
///
/// The production implementation calls the hosted inference API; tests swap
/// in fakes.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Translate a single, non-blank text.
    ///
    /// # Arguments
    /// * `text` - The text to translate
    /// * `source_language` - Language code of `text`, e.g. `eng_Latn`
    /// * `target_language` - Language code to translate into
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslateError>;

    /// Whether credentials for the backend are present
    fn is_configured(&self) -> bool;
}
