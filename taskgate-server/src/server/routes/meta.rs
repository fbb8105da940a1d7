use super::super::dto::{HealthResponse, RootResponse};
use super::super::error::ApiError;
use super::super::state::ServerState;
use axum::Json;
use axum::extract::State;
use std::sync::Arc;
use taskgate_core::agent::AgentFactory;

#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses(
        (status = 200, description = "Service is up", body = RootResponse)
    )
)]
pub async fn root_handler<F: AgentFactory>(
    State(state): State<Arc<ServerState<F>>>,
) -> Json<RootResponse> {
    let info = state.info();
    Json(RootResponse {
        message: info.title.clone(),
        status: "running".to_string(),
        version: info.version.clone(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "meta",
    responses(
        (status = 200, description = "Liveness check", body = HealthResponse)
    )
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}
