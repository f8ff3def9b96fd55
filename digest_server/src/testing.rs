use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use digest_core::{ai::handler::GeminiClient, helpers::config::AppConfig};
use serde_json::Value;
use tower::ServiceExt;
use wiremock::MockServer;

use crate::{router::router, state::ServerState};

pub fn app_with_client(config: AppConfig, model: GeminiClient) -> Router {
    router(Arc::new(ServerState::from((config, model))))
}

pub fn app_with_base_url(base_url: &str) -> Router {
    let config = AppConfig::new("test-key");
    let model = GeminiClient::new(&config).unwrap().with_base_url(base_url);
    app_with_client(config, model)
}

pub fn app_for(server: &MockServer) -> Router {
    app_with_base_url(&server.uri())
}

pub fn app_with_timeout(server: &MockServer, timeout: Duration) -> Router {
    let config = AppConfig::new("test-key");
    let model = GeminiClient::with_timeout(&config, timeout)
        .unwrap()
        .with_base_url(server.uri());
    app_with_client(config, model)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, body)
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    post_raw(app, uri, &body.to_string()).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}
