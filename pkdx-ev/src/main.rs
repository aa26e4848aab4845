//! pkdx-ev - Evolution service
//!
//! Serves the creature catalog and per-creature detail views, including the
//! resolved evolution chain, as JSON over HTTP.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pkdx_common::config::TomlConfig;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pkdx_ev::{build_router, AppState};

/// Command-line arguments for pkdx-ev
#[derive(Parser, Debug)]
#[command(name = "pkdx-ev")]
#[command(about = "Evolution chain service for the PKDX catalog")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides config)
    #[arg(short, long, env = "PKDX_PORT")]
    port: Option<u16>,

    /// Upstream API root (overrides config)
    #[arg(long, env = "PKDX_API_BASE_URL")]
    api_base_url: Option<String>,

    /// Explicit config file (default: ~/.config/pkdx/pkdx-ev.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// CLI/ENV over TOML over built-in defaults
fn resolve_config(args: &Args) -> Result<TomlConfig> {
    let mut config = match &args.config {
        Some(path) => TomlConfig::load(path)?,
        None => TomlConfig::load_or_default("pkdx-ev")?,
    };

    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(base) = &args.api_base_url {
        config.api_base_url = base.clone();
    }

    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = resolve_config(&args).context("Failed to resolve configuration")?;

    // RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "pkdx_ev={0},pkdx_common={0},tower_http=info",
                    config.logging.level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting pkdx-ev (Evolution service) v{}", env!("CARGO_PKG_VERSION"));
    info!(
        api_base = %config.normalized_api_base(),
        catalog_limit = config.catalog_fetch_limit,
        max_concurrent_lookups = config.max_concurrent_lookups,
        "Configuration resolved"
    );

    let state = AppState::from_config(&config).context("Failed to create PokeAPI client")?;
    let app = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("Listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
