use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::middleware::{log_requests, panic_response};
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/languages", get(handlers::list_languages))
        .route("/translate", post(handlers::translate))
        .route("/translate/batch", post(handlers::translate_batch))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(log_requests))
                .layer(CatchPanicLayer::custom(panic_response))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn panicking_handler_becomes_json_500() {
        let app: Router = Router::new()
            .route("/boom", get(|| async { panic!("catalog exploded") as () }))
            .layer(
                ServiceBuilder::new()
                    .layer(middleware::from_fn(log_requests))
                    .layer(CatchPanicLayer::custom(panic_response)),
            );

        let response = app
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().contains_key("x-request-id"));
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["detail"], "Internal server error");
        assert_eq!(body["message"], "catalog exploded");
    }
}
