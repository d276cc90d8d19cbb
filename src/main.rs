//! HTTP server for the mini-job engine.
//!
//! Reads `MINIJOB_CONFIG_DIR` (default `./config/minijob_2025`) and
//! `MINIJOB_BIND` (default `127.0.0.1:3000`). Log output is controlled with
//! `RUST_LOG`.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use minijob_engine::api::{AppState, create_router};
use minijob_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/minijob_2025";
const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        std::env::var("MINIJOB_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind = std::env::var("MINIJOB_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());

    let loader = ConfigLoader::load(&config_dir)
        .with_context(|| format!("loading configuration from {}", config_dir))?;
    info!(
        config = %loader.config().limits().name,
        threshold = %loader.config().threshold(),
        "Configuration loaded"
    );

    let app = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("binding {}", bind))?;
    info!(address = %bind, "Listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
