//! HTTP surface for the support agent.
//!
//! Routes:
//! - `POST /chat`   `{ message, history? }` -> response envelope
//! - `GET  /topics` canonical questions, sample prompts, LLM availability
//! - `GET  /health` liveness plus LLM availability

use std::{env, sync::Arc};

pub mod core;
pub mod error_handler;
mod middleware_layer;
mod routes;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::signal;
use tracing::{info, warn};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    middleware_layer::json_extractor::json_error_mapper,
    routes::{chat::chat_route::chat, health::health_route::health, topics::topics_route::topics},
};

/// Listen address when `API_ADDRESS` is unset.
pub const DEFAULT_API_ADDRESS: &str = "127.0.0.1:8080";

/// Builds the application router over a ready agent.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/topics", get(topics))
        .route("/health", get(health))
        .fallback(|| async { AppError::NotFound })
        .layer(middleware::from_fn(json_error_mapper))
        .with_state(Arc::new(state))
}

/// Loads the agent from the environment and serves until Ctrl+C.
pub async fn start() -> AppResult<()> {
    let host_url = env::var("API_ADDRESS").unwrap_or_else(|_| DEFAULT_API_ADDRESS.to_string());

    let state = AppState::from_env()?;
    if !state.agent.is_collaborator_available() {
        warn!("OPENAI_API_KEY not set; unmatched questions get the fallback answer");
    }
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(|source| AppError::Bind {
            addr: host_url.clone(),
            source,
        })?;
    info!(address = %host_url, "support desk listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
