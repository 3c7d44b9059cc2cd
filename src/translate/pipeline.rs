use std::sync::Arc;

use tracing::info;

use super::catalog::LanguageCatalog;
use super::interface::{
    BatchTranslationRequest, BatchTranslationResponse, TranslationBackend, TranslationRequest,
    TranslationResult, BLANK_CONFIDENCE, MODEL_CONFIDENCE,
};
use crate::error::TranslateError;

/// Validates requests, drives the backend and shapes results
#[derive(Clone)]
pub struct TranslationPipeline {
    catalog: Arc<LanguageCatalog>,
    backend: Arc<dyn TranslationBackend>,
    default_source_language: String,
    validate_languages: bool,
}

impl TranslationPipeline {
    pub fn new(
        catalog: Arc<LanguageCatalog>,
        backend: Arc<dyn TranslationBackend>,
        default_source_language: String,
        validate_languages: bool,
    ) -> Self {
        Self {
            catalog,
            backend,
            default_source_language,
            validate_languages,
        }
    }

    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    pub fn backend(&self) -> &Arc<dyn TranslationBackend> {
        &self.backend
    }

    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslateError> {
        let source = self.resolve_source(request.source_language.as_deref());
        self.check_languages(source, &request.target_language)?;
        if request.input_text.trim().is_empty() {
            return Err(TranslateError::InvalidInput(
                "Input text cannot be empty".to_string(),
            ));
        }

        info!(
            "Translating from {} to {}: '{}'",
            source,
            request.target_language,
            preview(&request.input_text)
        );
        let translated_text = self
            .backend
            .translate(&request.input_text, source, &request.target_language)
            .await?;

        Ok(TranslationResult {
            translated_text,
            source_language: source.to_string(),
            target_language: request.target_language.clone(),
            confidence: MODEL_CONFIDENCE,
        })
    }

    /// Translates each text in order; the first backend failure aborts the batch.
    pub async fn translate_batch(
        &self,
        request: &BatchTranslationRequest,
    ) -> Result<BatchTranslationResponse, TranslateError> {
        let source = self.resolve_source(request.source_language.as_deref());
        self.check_languages(source, &request.target_language)?;
        if request.texts.is_empty() {
            return Err(TranslateError::InvalidInput(
                "No texts provided for translation".to_string(),
            ));
        }

        info!(
            "Batch translating {} texts from {} to {}",
            request.texts.len(),
            source,
            request.target_language
        );

        let mut translations = Vec::with_capacity(request.texts.len());
        for text in &request.texts {
            let (translated_text, confidence) = if text.trim().is_empty() {
                (String::new(), BLANK_CONFIDENCE)
            } else {
                let translated = self
                    .backend
                    .translate(text, source, &request.target_language)
                    .await?;
                (translated, MODEL_CONFIDENCE)
            };
            translations.push(TranslationResult {
                translated_text,
                source_language: source.to_string(),
                target_language: request.target_language.clone(),
                confidence,
            });
        }

        Ok(BatchTranslationResponse { translations })
    }

    fn resolve_source<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested.unwrap_or(self.default_source_language.as_str())
    }

    fn check_languages(&self, source: &str, target: &str) -> Result<(), TranslateError> {
        if !self.validate_languages {
            return Ok(());
        }
        if !self.catalog.contains(source) {
            return Err(TranslateError::InvalidInput(format!(
                "Unsupported source language: {}",
                source
            )));
        }
        if !self.catalog.contains(target) {
            return Err(TranslateError::InvalidInput(format!(
                "Unsupported target language: {}",
                target
            )));
        }
        Ok(())
    }
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(50).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
