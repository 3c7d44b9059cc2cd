pub mod catalog;
pub mod client;
pub mod interface;
pub mod pipeline;
pub mod response;

pub use catalog::{LanguageCatalog, LanguageEntry};
pub use client::HuggingFaceClient;
pub use interface::{
    BatchTranslationRequest, BatchTranslationResponse, TranslationBackend, TranslationRequest,
    TranslationResult, BLANK_CONFIDENCE, MODEL_CONFIDENCE,
};
pub use pipeline::TranslationPipeline;
pub use response::UpstreamPayload;
