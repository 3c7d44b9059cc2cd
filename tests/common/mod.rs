//! Shared helpers for the HTTP-level tests

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use wiremock::MockServer;

use paraboda_translate::config::{Config, TranslationConfig};
use paraboda_translate::{create_routes, AppState};

pub const MODEL: &str = "facebook/nllb-200-distilled-600M";
pub const MODEL_PATH: &str = "/facebook/nllb-200-distilled-600M";
pub const API_KEY: &str = "hf_integration_test_key";

/// Config pointing at the mock inference server
pub fn config_for(server: &MockServer, api_key: Option<&str>) -> Config {
    Config {
        translation: TranslationConfig {
            api_key: api_key.map(str::to_string),
            api_base_url: server.uri(),
            model: MODEL.to_string(),
            timeout_secs: 5,
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn app_for(server: &MockServer, api_key: Option<&str>) -> Router {
    app_with(config_for(server, api_key))
}

pub fn app_with(config: Config) -> Router {
    create_routes(AppState::new(config).unwrap())
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: &Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
