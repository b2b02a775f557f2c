//! Service configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log filter directive (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `MAX_BODY_BYTES` - Request body limit in bytes (default: 16384, max: 1048576)
//!
//! A `.env` file in the working directory is honoured by [`load_from_env`].

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

/// Default request body limit in bytes.
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;

const MAX_BODY_BYTES_CEILING: usize = 1024 * 1024;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `MAX_BODY_BYTES` is set but is not a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let max_body_bytes = match env::var("MAX_BODY_BYTES") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("MAX_BODY_BYTES must be a number, got '{v}'"))?,
            Err(_) => defaults.max_body_bytes,
        };

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            max_body_bytes,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not a `host:port` socket address
    /// - `log_format` is not `text` or `json`
    /// - `max_body_bytes` is zero or above 1 MiB
    pub fn validate(&self) -> Result<()> {
        self.listen_addr.parse::<SocketAddr>().with_context(|| {
            format!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            )
        })?;

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.max_body_bytes == 0 || self.max_body_bytes > MAX_BODY_BYTES_CEILING {
            anyhow::bail!(
                "MAX_BODY_BYTES must be between 1 and {}, got {}",
                MAX_BODY_BYTES_CEILING,
                self.max_body_bytes
            );
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Max body size: {} bytes", self.max_body_bytes);
    }
}

/// Loads `.env` (if present), then loads and validates configuration.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
pub fn load_from_env() -> Result<Config> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
