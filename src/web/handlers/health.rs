//! Health check handler

use axum::{extract::State, Json};

use crate::web::{responses::HealthResponse, AppState};

/// Liveness probe; reports the configured service name and crate version
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.config.service.name.clone()))
}
