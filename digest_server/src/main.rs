mod docs;
mod error;
mod health;
mod middlewares;
mod router;
mod state;
mod summarize;
#[cfg(test)]
mod testing;

use std::sync::Arc;

use digest_core::{ai::handler::GeminiClient, helpers::config::AppConfig};
use dotenvy::dotenv;
use router::router;
use state::ServerState;
use tracing_subscriber::EnvFilter;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
    log::info!("Shutting down");
}

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    let model = GeminiClient::new(&config)?;
    let bind_address = config.bind_address();

    log::info!("Using model {}", model.model());

    let state = Arc::new(ServerState::from((config, model)));

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    log::info!("Listening on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
