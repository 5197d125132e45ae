//! Catalog service — CLI launcher
//!
//! Headless catalog pricing server suitable for deployment as a systemd
//! service, Docker container, or standalone process.
//!
//! ```sh
//! # Run with default config (<config_dir>/catalog-service/config.toml)
//! catalog-cli
//!
//! # Custom config path
//! catalog-cli --config /etc/catalog-service/config.toml
//!
//! # Override the port, start with an empty catalog
//! catalog-cli --port 8081 --no-seed
//!
//! # Validate config without starting
//! catalog-cli --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use catalog_service::{default_config_path, init_tracing, AppConfig, ServerHandle, ServerOptions};

/// Catalog pricing service — REST API over an in-memory brand/product catalog.
#[derive(Parser, Debug)]
#[command(
    name = "catalog-cli",
    version,
    about = "HTTP API for brand/product catalog pricing reports"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "CATALOG_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Start with an empty catalog instead of the reference dataset.
    #[arg(long)]
    no_seed: bool,

    /// Validate the configuration file and exit without starting.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!(
                "Failed to load config from {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            AppConfig::default()
        }
    };

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    if cli.check {
        println!("Configuration is valid");
        println!("  Config file : {}", config_path.display());
        println!("  Address     : {}", config.server.address());
        println!("  Log level   : {}", config.logging.level);
        println!("  Seed data   : {}", config.catalog.seed_on_startup && !cli.no_seed);
        return Ok(());
    }

    init_tracing(&config);
    info!("Configuration loaded from {}", config_path.display());

    let handle = ServerHandle::start(ServerOptions {
        config,
        seed: !cli.no_seed,
    })
    .await
    .map_err(|e| {
        error!("Failed to start server: {}", e);
        e
    })?;

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");
    handle.shutdown().await;

    Ok(())
}
