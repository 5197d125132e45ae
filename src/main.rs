//! Catalog pricing service binary.
//!
//! Reads configuration from a TOML file
//! (`<config_dir>/catalog-service/config.toml`, overridable via
//! `CATALOG_CONFIG`), serves the REST API until interrupted.

use tracing::{error, info};

use catalog_service::{default_config_path, init_tracing, AppConfig, ServerHandle, ServerOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::var("CATALOG_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());

    let config = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            let cfg = AppConfig::default();
            init_tracing(&cfg);
            error!("Failed to load config: {}. Using defaults.", e);
            cfg
        }
    };

    info!("Starting catalog pricing service...");

    let handle = ServerHandle::start(ServerOptions { config, seed: true }).await?;

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");
    handle.shutdown().await;

    Ok(())
}
