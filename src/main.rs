// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::results_service::ResultsService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::http_prediction_client::HttpPredictionClient;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::create_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config().context("Failed to load configuration")?;

    // Create prediction client (infrastructure layer)
    let client = Arc::new(
        HttpPredictionClient::new(
            config.prediction.base_url.clone(),
            config.prediction.timeout(),
        )
        .context("Failed to build HTTP client")?,
    );

    // Create services (application layer)
    let results_service = ResultsService::new(client);

    let state = Arc::new(AppState {
        results_service,
        debounce: config.ui.debounce(),
    });

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!(
        "Starting wind-power-results on {} (predictions from {})",
        addr,
        config.prediction.base_url
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
