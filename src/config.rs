use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use regex::{Captures, Regex};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Bearer token for the inference API. Usually supplied via `HF_API_KEY`.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_source_language")]
    pub default_source_language: String,
    /// Reject language codes missing from the catalog
    #[serde(default = "default_validate_languages")]
    pub validate_languages: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_api_base_url() -> String {
    "https://api-inference.huggingface.co/models".to_string()
}

fn default_model() -> String {
    "facebook/nllb-200-distilled-600M".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_source_language() -> String {
    "eng_Latn".to_string()
}

fn default_validate_languages() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: default_api_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            default_source_language: default_source_language(),
            validate_languages: default_validate_languages(),
        }
    }
}

impl TranslationConfig {
    pub fn endpoint_url(&self) -> String {
        format!("{}/{}", self.api_base_url.trim_end_matches('/'), self.model)
    }

    pub fn api_key_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

impl Config {
    /// Load configuration from a YAML or JSON file, expanding `${VAR}` references
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path))?;
        let content = substitute_env_vars(&content, |name| std::env::var(name).ok());

        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(serde_yaml::from_str(&content)?)
        }
    }

    /// Try each candidate path in order, falling back to defaults when none exists.
    /// Returns the config and the path it came from.
    pub fn discover(candidates: &[String]) -> Result<(Self, Option<String>)> {
        for path in candidates {
            if Path::new(path).exists() {
                let config = Self::load(path)?;
                return Ok((config, Some(path.clone())));
            }
            tracing::debug!("No config file at {}", path);
        }
        Ok((Self::default(), None))
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|name| std::env::var(name).ok());
    }

    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("HF_API_KEY") {
            self.translation.api_key = Some(key);
        }
        if let Some(url) = lookup("HF_API_URL") {
            self.translation.api_base_url = url;
        }
        if let Some(model) = lookup("TRANSLATION_MODEL") {
            self.translation.model = model;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!("Ignoring invalid PORT value: {}", port),
            }
        }
    }
}

/// Replace `${VAR_NAME}` with the value from `lookup`; unknown variables are left as-is
pub fn substitute_env_vars<F>(content: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let pattern = Regex::new(r"\$\{(\w+)\}").expect("valid env var pattern");
    pattern
        .replace_all(content, |caps: &Captures| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Mask an API key for logging: first and last five characters only
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 10 {
        let head: String = chars[..5].iter().collect();
        let tail: String = chars[chars.len() - 5..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "***masked***".to_string()
    }
}
