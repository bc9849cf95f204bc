// Solace V1 Backend Entry Point
// Rule-based response engine behind a thin HTTP boundary

mod config;
mod engine;
mod error;
mod models;
mod server;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use config::ServerConfig;
use server::AppState;

fn init_telemetry() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let formatting_layer = BunyanFormattingLayer::new("solace-core".into(), std::io::stdout);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_telemetry();

    let config = ServerConfig::from_env().context("failed to load server configuration")?;
    let state = Arc::new(AppState::new());

    info!("Engine tables loaded, binding {}", config.bind_address());

    server::serve(config, state)
        .await
        .context("server terminated with an error")?;

    Ok(())
}
