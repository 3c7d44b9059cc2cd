//! Decoding of inference API responses.
//!
//! The hosted pipeline does not return a single stable shape. Three forms are
//! tried in order:
//!
//! 1. `[{"translation_text": "..."}, ...]` - first element wins
//! 2. `{"translation_text": "..."}`
//! 3. anything else - the JSON text of the whole value is passed through

use serde_json::Value;

const TRANSLATION_FIELD: &str = "translation_text";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamPayload {
    Listed(String),
    Single(String),
    Raw(String),
}

impl UpstreamPayload {
    pub fn decode(value: &Value) -> Self {
        if let Some(text) = value
            .as_array()
            .and_then(|items| items.first())
            .and_then(translation_text)
        {
            return UpstreamPayload::Listed(text);
        }

        if value.is_object() {
            if let Some(text) = translation_text(value) {
                return UpstreamPayload::Single(text);
            }
        }

        UpstreamPayload::Raw(value.to_string())
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, UpstreamPayload::Raw(_))
    }

    pub fn into_text(self) -> String {
        match self {
            UpstreamPayload::Listed(text)
            | UpstreamPayload::Single(text)
            | UpstreamPayload::Raw(text) => text,
        }
    }
}

fn translation_text(value: &Value) -> Option<String> {
    value
        .get(TRANSLATION_FIELD)
        .and_then(Value::as_str)
        .map(str::to_string)
}
