use std::sync::Arc;

use axum::extract::{Json, State};
use digest_core::helpers::{dto::HealthResponse, utils::iso_timestamp};

use crate::state::ServerState;

#[utoipa::path(
    get,
    path = "/health",
    description = "Liveness check. Never calls the model provider.",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    )
)]
pub async fn health(State(server_state): State<Arc<ServerState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: server_state.config().model().to_string(),
        timestamp: iso_timestamp(),
    })
}
