//! Configuration module
//!
//! TOML configuration with serde defaults for every field, so a missing
//! or partial file still yields a runnable server. Default location is
//! `<config_dir>/catalog-service/config.toml`, overridable via the
//! `CATALOG_CONFIG` environment variable or the CLI.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infrastructure::storage::LockSettings;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error).
    pub level: String,
    /// Emit JSON-formatted log lines.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Load the reference dataset on startup.
    pub seed_on_startup: bool,
    /// Lock acquisition attempts before giving up.
    pub lock_max_retries: u32,
    /// Wait per lock acquisition attempt, in milliseconds.
    pub lock_retry_delay_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_on_startup: true,
            lock_max_retries: 3,
            lock_retry_delay_ms: 100,
        }
    }
}

impl CatalogConfig {
    pub fn lock_settings(&self) -> LockSettings {
        LockSettings {
            max_retries: self.lock_max_retries,
            retry_delay: Duration::from_millis(self.lock_retry_delay_ms),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

/// Default config file location.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("catalog-service")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_policy() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.address(), "0.0.0.0:8080");
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.catalog.seed_on_startup);

        let lock = cfg.catalog.lock_settings();
        assert_eq!(lock.max_retries, 3);
        assert_eq!(lock.retry_delay, Duration::from_millis(100));
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            port = 9999

            [catalog]
            seed_on_startup = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 9999);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert!(!cfg.catalog.seed_on_startup);
        assert_eq!(cfg.catalog.lock_max_retries, 3);
    }
}
