use std::sync::Arc;

use axum::extract::State;
use serde::Serialize;

use crate::core::{app_state::AppState, http::response_envelope::ApiResponse};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub collaborator_available: bool,
}

/// Handler: GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> ApiResponse<HealthResponse> {
    ApiResponse::success(HealthResponse {
        status: "ok",
        collaborator_available: state.agent.is_collaborator_available(),
    })
}
