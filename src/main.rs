use std::error::Error;

use ai_llm_service::telemetry;
use tracing::Level;
use tracing_subscriber::{Layer, filter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine; variables may come from the real environment.
    dotenvy::dotenv().ok();

    // RUST_LOG drives everything; LLM_LOG_LEVEL tunes only the chat client.
    let llm_level = std::env::var("LLM_LOG_LEVEL")
        .ok()
        .and_then(|v| v.parse::<Level>().ok())
        .unwrap_or(Level::INFO);
    let filter = telemetry::env_filter_with_level("info", llm_level);

    let app_events =
        filter::filter_fn(|meta| !meta.target().starts_with(telemetry::TARGET_PREFIX));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_filter(app_events))
        .with(telemetry::layer())
        .init();

    api::start().await?;

    Ok(())
}
