/*
 * Responsibility
 * - GET /health (liveness, never behind the API key)
 * - mounted outside the version prefix
 */
use axum::{Json, extract::State};

use crate::{api::v1::dto::messages::HealthResponse, state::AppState};

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: state.service_name.to_string(),
    })
}
