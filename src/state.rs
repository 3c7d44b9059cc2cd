use std::sync::Arc;

use crate::config::Config;
use crate::translate::{HuggingFaceClient, LanguageCatalog, TranslationBackend, TranslationPipeline};

/// Read-only state shared by every request
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pipeline: TranslationPipeline,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let backend = Arc::new(HuggingFaceClient::from_config(&config.translation)?);
        Ok(Self::with_backend(config, backend))
    }

    /// Build state around an arbitrary backend
    pub fn with_backend(config: Config, backend: Arc<dyn TranslationBackend>) -> Self {
        let pipeline = TranslationPipeline::new(
            Arc::new(LanguageCatalog::default()),
            backend,
            config.translation.default_source_language.clone(),
            config.translation.validate_languages,
        );

        Self {
            config: Arc::new(config),
            pipeline,
        }
    }

    pub fn catalog(&self) -> &LanguageCatalog {
        self.pipeline.catalog()
    }

    pub fn api_key_configured(&self) -> bool {
        self.pipeline.backend().is_configured()
    }
}
