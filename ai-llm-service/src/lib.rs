//! Shared LLM client for the support desk.
//!
//! - [`config`]: provider tag, model config and env-driven defaults
//! - [`chat`]: provider-agnostic chat message types
//! - [`services::open_ai_service::OpenAiService`]: non-streaming chat completions
//! - [`error_handler`]: unified [`AiLlmError`] and env/validation helpers
//! - [`telemetry`]: library-scoped tracing layer
//!
//! Construct the service once and share it (`Arc`) with dependents; it keeps a
//! single pooled HTTP client.

pub mod chat;
pub mod config;
pub mod error_handler;
pub mod services;
pub mod telemetry;

pub use chat::{ChatMessage, ChatRole};
pub use config::{
    default_config::config_openai_chat, llm_model_config::LlmModelConfig,
    llm_provider::LlmProvider,
};
pub use error_handler::{AiLlmError, Result};
pub use services::open_ai_service::OpenAiService;
