//! Runtime configuration loaded from environment variables.

use std::path::PathBuf;

use ai_llm_service::{LlmModelConfig, config::default_config::config_openai_chat_from};
use tracing::warn;

use crate::error::AgentError;
use crate::knowledge::DEFAULT_MATCH_THRESHOLD;

/// Everything needed to build a [`crate::SupportAgent`].
#[derive(Clone, Debug)]
pub struct AgentConfig {
    /// Minimum combined score for a knowledge-base hit (`KB_MATCH_THRESHOLD`).
    pub match_threshold: f64,
    /// Optional JSON knowledge file (`KNOWLEDGE_BASE_PATH`); built-in pairs otherwise.
    pub knowledge_path: Option<PathBuf>,
    /// Chat collaborator config; `None` when `OPENAI_API_KEY` is unset.
    pub llm: Option<LlmModelConfig>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            knowledge_path: None,
            llm: None,
        }
    }
}

impl AgentConfig {
    /// Build from process environment.
    ///
    /// # Errors
    /// Propagates invalid LLM settings as [`AgentError::Llm`].
    pub fn from_env() -> Result<Self, AgentError> {
        Self::from_vars(|k| std::env::var(k).ok())
    }

    /// Same as [`AgentConfig::from_env`], reading variables through `lookup`.
    pub fn from_vars<F>(lookup: F) -> Result<Self, AgentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let match_threshold = match lookup("KB_MATCH_THRESHOLD") {
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(t) if t.is_finite() => t,
                _ => {
                    warn!(value = %raw, "invalid KB_MATCH_THRESHOLD, using default");
                    DEFAULT_MATCH_THRESHOLD
                }
            },
            None => DEFAULT_MATCH_THRESHOLD,
        };

        let knowledge_path = lookup("KNOWLEDGE_BASE_PATH")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let llm = config_openai_chat_from(&lookup)?;

        Ok(Self {
            match_threshold,
            knowledge_path,
            llm,
        })
    }
}
