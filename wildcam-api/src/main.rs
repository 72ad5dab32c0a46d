//! core-api-service - read-only image and attribution API
//!
//! Resolves configuration, opens the image store read-only and serves the
//! HTTP API until Ctrl-C or SIGTERM.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wildcam_api::{build_router, db, AppState};
use wildcam_common::config::{redact_database_url, resolve_service_config, CliOverrides};

/// Command-line arguments for core-api-service
#[derive(Parser, Debug)]
#[command(name = "core-api-service")]
#[command(about = "Wildlife-camera image and species attribution API")]
#[command(version)]
struct Args {
    /// Port to listen on (falls back to PORT, then config file, then 8080)
    #[arg(short, long)]
    port: Option<u16>,

    /// Address to bind
    #[arg(short, long)]
    bind: Option<String>,

    /// Storage connection URL (falls back to DATABASE_URL)
    #[arg(short, long)]
    database_url: Option<String>,

    /// TOML config file (falls back to WILDCAM_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wildcam_api=info,core_api_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!(
        "Starting core-api-service v{}",
        env!("CARGO_PKG_VERSION")
    );

    let config = resolve_service_config(&CliOverrides {
        bind_address: args.bind,
        port: args.port,
        database_url: args.database_url,
        config_file: args.config,
    });

    info!("Database: {}", redact_database_url(&config.database_url));

    let pool = match db::connect_readonly(&config.database_url).await {
        Ok(pool) => {
            info!("✓ Connected to database (read-only)");
            pool
        }
        Err(e) => {
            error!("Failed to connect to database: {:#}", e);
            return Err(e);
        }
    };

    let app = build_router(AppState::new(pool));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("core-api-service listening on http://{}", addr);

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
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
