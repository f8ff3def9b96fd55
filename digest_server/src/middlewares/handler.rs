use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use digest_core::helpers::utils::new_request_id;
use serde_json::json;

use crate::error::ErrorServer;

/// Last line of defence for panics raised anywhere below the router.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let request_id = new_request_id();

    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    log::error!("[{}] Unhandled panic: {}", request_id, details);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Internal server error",
            "requestId": request_id,
        })),
    )
        .into_response()
}

pub async fn not_found() -> ErrorServer {
    ErrorServer {
        message: "Not found".to_string(),
        status: StatusCode::NOT_FOUND.into(),
    }
}
