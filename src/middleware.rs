use std::any::Any;
use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const PROCESS_TIME_HEADER: &str = "x-process-time";

/// Log method, path, status and wall-clock time of every request
pub async fn log_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let elapsed = start.elapsed().as_secs_f64();
    let status = response.status();

    if status.is_server_error() {
        warn!(
            request_id = %request_id,
            "{} {} - Status: {} - Time: {:.2}s",
            method, path, status.as_u16(), elapsed
        );
    } else {
        info!(
            request_id = %request_id,
            "{} {} - Status: {} - Time: {:.2}s",
            method, path, status.as_u16(), elapsed
        );
    }

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, value);
    }
    if let Ok(value) = HeaderValue::from_str(&format!("{:.4}", elapsed)) {
        headers.insert(PROCESS_TIME_HEADER, value);
    }

    response
}

/// Turn a handler panic into a JSON 500 instead of dropping the connection
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("Handler panicked: {}", message);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "internal_error",
            "detail": "Internal server error",
            "message": message,
        })),
    )
        .into_response()
}
