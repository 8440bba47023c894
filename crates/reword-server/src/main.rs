//! # reword-server
//!
//! Server binary: loads configuration, installs tracing and metrics, and
//! serves the rewrite engine over HTTP.

#![deny(unsafe_code)]

mod config;
mod metrics;
mod routes;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::config::ServerConfig;

/// Korean tone/style rewrite server.
#[derive(Parser, Debug)]
#[command(name = "reword-server", about = "Korean tone/style rewrite HTTP server")]
struct Cli {
    /// Host to bind (overrides `REWORD_HOST`).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides `REWORD_PORT`).
    #[arg(long)]
    port: Option<u16>,

    /// Produce the long length class for every plan tier
    /// (overrides `REWORD_UNLOCK_ALL_LENGTHS`).
    #[arg(long)]
    unlock_all_lengths: bool,

    /// Emit JSON-formatted logs.
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    reword_core::logging::init_tracing("info,reword_engine=info", cli.log_json);

    let mut config = ServerConfig::from_env().context("loading configuration")?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if cli.unlock_all_lengths {
        config.unlock_all_lengths = true;
    }

    let handle = metrics::install_recorder();
    let state = routes::AppState::new(&config, handle);
    let app = routes::router(state, &config);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(addr = %listener.local_addr()?, "reword server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
