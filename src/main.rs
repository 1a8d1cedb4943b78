//! HTTP routing showcase server.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │              ROUTING SHOWCASE                 │
//!                     │                                               │
//!  Client Request     │  ┌──────────┐   ┌────────────┐   ┌─────────┐ │
//!  ───────────────────┼─▶│middleware│──▶│   router   │──▶│ route   │ │
//!                     │  │ id/trace │   │ (merged    │   │ group   │ │
//!                     │  │ timeout  │   │  groups)   │   │ handler │ │
//!                     │  └──────────┘   └─────┬──────┘   └────┬────┘ │
//!  Client Response    │                       │ no match      │      │
//!  ◀──────────────────┼───────────────────────┴── 404 ◀───────┘      │
//!                     │                                               │
//!                     │  greeting · params · headers · text · json    │
//!                     │  multipart · websocket echo                   │
//!                     └──────────────────────────────────────────────┘
//! ```
//!
//! The server always listens on `127.0.0.1:8080`. An optional TOML file
//! tunes timeouts, body limits, the WebSocket message limit and logging.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use routing_showcase::config::{self, ServerConfig, BIND_ADDRESS};
use routing_showcase::lifecycle::{signals, Shutdown};
use routing_showcase::observability::logging;
use routing_showcase::HttpServer;

#[derive(Parser)]
#[command(name = "routing-showcase")]
#[command(about = "Demonstrates HTTP routing features on a fixed local port", long_about = None)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured log level.
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
        config::validation::validate_config(&config).map_err(config::ConfigError::Validation)?;
    }

    logging::init(&config.observability.log_level);

    tracing::info!("routing-showcase v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = ?cli.config,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = config.limits.max_body_bytes,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(BIND_ADDRESS).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(&shutdown);

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
