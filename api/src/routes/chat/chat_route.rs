//! POST /chat: routes one message through the support agent.

use std::sync::Arc;

use axum::{Json, extract::State};
use support_agent::ResponseEnvelope;
use tracing::info;

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    routes::chat::chat_request::ChatRequest,
};

/// Handler: POST /chat
///
/// Always `200`: failures are reported inside the envelope (`source: "error"`).
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/chat \
///   -H 'content-type: application/json' \
///   -d '{"message":"What does EVA do?","history":[]}'
/// ```
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ChatRequest>,
) -> ApiResponse<ResponseEnvelope> {
    let envelope = state
        .agent
        .process_message(&body.message, &body.history)
        .await;

    info!(
        source = %envelope.source,
        history = body.history.len(),
        matched = envelope.matched_question.is_some(),
        "chat handled"
    );

    ApiResponse::success(envelope)
}
