//! # Lattice Proxy
//!
//! HTTP gateway in front of a sharded observer fleet. Routes account,
//! transaction, block, and hyperblock requests to the owning shard and
//! aggregates cross-shard hyperblocks, hiding the topology from clients.

use anyhow::Result;
use clap::Parser;
use proxy_runtime::{api, build_facade, ProxyConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "lattice-proxy", version, about = "Sharded observer gateway")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "config/proxy.toml")]
    config: String,

    /// Log verbosity.
    #[arg(long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Lattice Proxy v{}", proxy_runtime::VERSION);

    let config = ProxyConfig::load(&cli.config)?;
    let addr = config.rest_api_addr();
    let facade = build_facade(&config)?;

    let router = api::router(facade);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "REST API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;

    info!("Shutdown complete");
    Ok(())
}
