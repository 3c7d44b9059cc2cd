use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::interface::TranslationBackend;
use super::response::UpstreamPayload;
use crate::config::TranslationConfig;
use crate::error::TranslateError;

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters<'a>,
}

#[derive(Debug, Serialize)]
struct InferenceParameters<'a> {
    src_lang: &'a str,
    tgt_lang: &'a str,
}

/// Client for the hosted NLLB inference endpoint
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HuggingFaceClient {
    pub fn new(endpoint: String, api_key: Option<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        info!("Initialized HuggingFaceClient: endpoint={}", endpoint);
        Ok(Self {
            client,
            endpoint,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn from_config(config: &TranslationConfig) -> anyhow::Result<Self> {
        Self::new(
            config.endpoint_url(),
            config.api_key.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }
}

#[async_trait]
impl TranslationBackend for HuggingFaceClient {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslateError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            error!("Missing HF_API_KEY, refusing to call the inference API");
            TranslateError::Misconfiguration(
                "API key not configured. Please set the HF_API_KEY environment variable."
                    .to_string(),
            )
        })?;

        let body = InferenceRequest {
            inputs: text,
            parameters: InferenceParameters {
                src_lang: source_language,
                tgt_lang: target_language,
            },
        };
        debug!("Sending request to {}: {:?}", self.endpoint, body);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Request error: {}", e);
                TranslateError::from(e)
            })?;

        let status = response.status();
        debug!("Inference API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                warn!("Failed to read error body from inference API: {}", e);
                String::new()
            });
            error!("Inference API error: {} - {}", status, body);
            return Err(TranslateError::UpstreamError {
                status: status.as_u16(),
                body,
            });
        }

        // a timeout can still fire while the body streams in
        let bytes = response.bytes().await.map_err(|e| {
            error!("Failed to read inference API response: {}", e);
            TranslateError::from(e)
        })?;
        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| TranslateError::Unexpected(format!("invalid response body: {}", e)))?;

        let payload = UpstreamPayload::decode(&value);
        if payload.is_raw() {
            warn!("Unrecognized response shape, passing through raw value: {}", value);
        }
        Ok(payload.into_text())
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
