use std::sync::Arc;

use support_agent::{AgentConfig, SupportAgent};

use crate::error_handler::AppResult;

/// Shared state for all HTTP handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Read-only router; safe to share across concurrent requests.
    pub agent: Arc<SupportAgent>,
}

impl AppState {
    pub fn new(agent: SupportAgent) -> Self {
        Self {
            agent: Arc::new(agent),
        }
    }

    /// Load the agent from environment variables.
    pub fn from_env() -> AppResult<Self> {
        let cfg = AgentConfig::from_env()?;
        Ok(Self::new(SupportAgent::from_config(cfg)?))
    }
}
