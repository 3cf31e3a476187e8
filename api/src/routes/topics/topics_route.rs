//! GET /topics: what the assistant knows about.

use std::sync::Arc;

use axum::extract::State;
use serde::Serialize;

use crate::core::{app_state::AppState, http::response_envelope::ApiResponse};

/// Short prompts a client can offer as one-click questions.
pub const SAMPLE_QUESTIONS: &[&str] = &[
    "What does EVA do?",
    "What does CAM do?",
    "How does PHIL work?",
    "Tell me about Thoughtful AI's Agents",
    "What are the benefits of using Thoughtful AI's agents?",
];

#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<String>,
    pub sample_questions: &'static [&'static str],
    pub ai_fallback_available: bool,
}

pub async fn topics(State(state): State<Arc<AppState>>) -> ApiResponse<TopicsResponse> {
    ApiResponse::success(TopicsResponse {
        topics: state.agent.get_available_topics(),
        sample_questions: SAMPLE_QUESTIONS,
        ai_fallback_available: state.agent.is_collaborator_available(),
    })
}
