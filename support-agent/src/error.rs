//! Typed error for the support-agent crate.

use std::path::PathBuf;

use ai_llm_service::AiLlmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    /// The chat collaborator failed to produce an answer for one request.
    #[error("failed to get AI response: {0}")]
    Collaborator(String),

    /// Client construction or configuration errors from ai-llm-service.
    #[error("LLM error: {0}")]
    Llm(#[from] AiLlmError),

    /// Knowledge file could not be read.
    #[error("failed to read knowledge file {path}: {source}")]
    KnowledgeLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Knowledge file is not the expected JSON shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
