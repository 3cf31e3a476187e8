//! Default LLM configs loaded strictly from environment variables.
//!
//! The chat profile is the only one the support desk needs: a single OpenAI
//! chat model with fixed sampling policy. The credential is the switch: when
//! it is absent the LLM path is simply disabled.
//!
//! # Environment variables
//!
//! - `OPENAI_API_KEY`   = credential; unset/blank disables the chat profile
//! - `OPENAI_BASE_URL`  = optional API base (default `https://api.openai.com`)
//! - `LLM_TIMEOUT_SECS` = optional request timeout in seconds (default 60)

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{AiLlmError, env_opt_u32, non_empty, validate_http_endpoint},
};

/// Chat model used for generated answers.
pub const CHAT_MODEL: &str = "gpt-4o";
/// Upper bound on generated tokens per answer.
pub const CHAT_MAX_TOKENS: u32 = 500;
/// Sampling temperature for generated answers.
pub const CHAT_TEMPERATURE: f32 = 0.7;
/// Request timeout when `LLM_TIMEOUT_SECS` is not set.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
/// Public OpenAI API base.
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com";

/// Constructs the OpenAI chat config from process environment.
///
/// Returns `Ok(None)` when `OPENAI_API_KEY` is missing or blank.
///
/// # Errors
/// - [`crate::error_handler::ConfigError::InvalidFormat`] if `OPENAI_BASE_URL` is not http(s)
/// - [`crate::error_handler::ConfigError::InvalidNumber`] if `LLM_TIMEOUT_SECS` is invalid
pub fn config_openai_chat() -> Result<Option<LlmModelConfig>, AiLlmError> {
    config_openai_chat_from(|k| std::env::var(k).ok())
}

/// Same as [`config_openai_chat`], reading variables through `lookup`.
pub fn config_openai_chat_from<F>(lookup: F) -> Result<Option<LlmModelConfig>, AiLlmError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(api_key) = non_empty(&lookup, "OPENAI_API_KEY") else {
        return Ok(None);
    };

    let endpoint = non_empty(&lookup, "OPENAI_BASE_URL")
        .map(|u| u.trim().to_string())
        .unwrap_or_else(|| DEFAULT_OPENAI_URL.to_string());
    validate_http_endpoint("OPENAI_BASE_URL", &endpoint)?;

    let timeout_secs = env_opt_u32(&lookup, "LLM_TIMEOUT_SECS")?
        .map(u64::from)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(Some(LlmModelConfig {
        provider: LlmProvider::OpenAI,
        model: CHAT_MODEL.to_string(),
        endpoint,
        api_key: Some(api_key.trim().to_string()),
        max_tokens: Some(CHAT_MAX_TOKENS),
        temperature: Some(CHAT_TEMPERATURE),
        top_p: None,
        timeout_secs: Some(timeout_secs),
    }))
}
