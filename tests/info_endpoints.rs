mod common;

use axum::{body::Body, http::Request, http::StatusCode};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{app_for, get, API_KEY, MODEL};

#[tokio::test]
async fn root_lists_endpoints() {
    let server = MockServer::start().await;
    let app = app_for(&server, Some(API_KEY));

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "ParaBoda Translation API");
    assert_eq!(body["model"], MODEL);
    assert_eq!(body["endpoints"]["batch_translate"], "/translate/batch");
    assert_eq!(body["endpoints"]["languages"], "/languages");
}

#[tokio::test]
async fn health_reports_configuration_without_calling_upstream() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = get(&app_for(&server, Some(API_KEY)), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["model"], MODEL);
    assert_eq!(body["supportedLanguages"], 8);
    assert_eq!(body["apiKeyConfigured"], true);
    assert!(body["timestamp"].is_string());

    let (_, body) = get(&app_for(&server, None), "/health").await;
    assert_eq!(body["apiKeyConfigured"], false);
}

#[tokio::test]
async fn languages_are_listed_in_catalog_order() {
    let server = MockServer::start().await;
    let app = app_for(&server, Some(API_KEY));

    let (status, body) = get(&app, "/languages").await;
    assert_eq!(status, StatusCode::OK);
    let codes: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["code"].as_str().unwrap())
        .collect();
    assert_eq!(
        codes,
        vec!["eng_Latn", "swh_Latn", "kik_Latn", "luo_Latn", "luy_Latn", "kam_Latn", "som_Latn", "kin_Latn"]
    );
    assert_eq!(
        body[2],
        json!({"code": "kik_Latn", "name": "Kikuyu", "nativeName": "Gĩkũyũ"})
    );

    // stable across calls
    let (_, again) = get(&app, "/languages").await;
    assert_eq!(body, again);
}

#[tokio::test]
async fn responses_carry_request_id_and_timing_headers() {
    let server = MockServer::start().await;
    let app = app_for(&server, Some(API_KEY));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    let request_id = headers.get("x-request-id").unwrap().to_str().unwrap();
    assert_eq!(request_id.len(), 36);
    let elapsed: f64 = headers
        .get("x-process-time")
        .unwrap()
        .to_str()
        .unwrap()
        .parse()
        .unwrap();
    assert!(elapsed >= 0.0);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let server = MockServer::start().await;
    let app = app_for(&server, Some(API_KEY));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/languages")
                .header("origin", "https://paraboda.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
