use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use crate::{
    docs::{dto::ApiDoc, handler::api_docs},
    health::handler::health,
    middlewares::handler::{handle_panic, not_found},
    state::ServerState,
    summarize::handler::summarize,
};

const BODY_LIMIT_BYTES: usize = 1024 * 1024;

pub fn router(state: Arc<ServerState>) -> Router {
    let doc = ApiDoc::openapi();

    Router::new()
        .merge(Redoc::with_url("/redoc", doc))
        .route("/summarize", post(summarize))
        .route("/health", get(health))
        .route("/docs", get(api_docs))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::testing::{app_with_base_url, get, post_raw};

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let app = app_with_base_url("http://127.0.0.1:9");

        let (status, body) = get(app, "/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Not found"}));
    }

    #[tokio::test]
    async fn test_docs_lists_routes() {
        let app = app_with_base_url("http://127.0.0.1:9");

        let (status, body) = get(app, "/docs").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/summarize"]["post"].is_object());
        assert!(body["paths"]["/health"]["get"].is_object());
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let app = app_with_base_url("http://127.0.0.1:9");
        let huge = format!("{{\"comments\": [\"{}\"]}}", "a".repeat(2 * 1024 * 1024));

        let (status, body) = post_raw(app, "/summarize", &huge).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }
}
