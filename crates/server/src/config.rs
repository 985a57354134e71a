//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `VITRINE_CATALOG_PATH` - Path to the catalog JSON document
//! - `VITRINE_ORDERS_PATH` - Path to the order-log JSON document
//!
//! ## Optional
//! - `VITRINE_HOST` - Bind address (default: 127.0.0.1)
//! - `VITRINE_PORT` - Listen port (default: 3000)
//! - `VITRINE_IMAGES_DIR` - Directory served under `/img` (default: img)
//! - `VITRINE_STRICT_PARAMS` - Reject unknown `/api/goods` query keys
//!   (default: true; false enables the extended key set)
//! - `VITRINE_RELOAD_PER_REQUEST` - Re-read the catalog document on every
//!   request instead of caching it at startup (default: false)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;
use vitrine_core::ValidationMode;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Path to the catalog JSON document
    pub catalog_path: PathBuf,
    /// Path to the order-log JSON document
    pub orders_path: PathBuf,
    /// Directory of product images served under `/img`
    pub images_dir: PathBuf,
    /// Query-parameter validation mode for `/api/goods`
    pub validation_mode: ValidationMode,
    /// Re-read the catalog document on every request
    pub reload_per_request: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("VITRINE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("VITRINE_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("VITRINE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("VITRINE_PORT".to_owned(), e.to_string()))?;

        let catalog_path = PathBuf::from(get_required_env("VITRINE_CATALOG_PATH")?);
        let orders_path = PathBuf::from(get_required_env("VITRINE_ORDERS_PATH")?);
        let images_dir = PathBuf::from(get_env_or_default("VITRINE_IMAGES_DIR", "img"));

        let strict = parse_bool("VITRINE_STRICT_PARAMS", true)?;
        let validation_mode = if strict {
            ValidationMode::Strict
        } else {
            ValidationMode::Permissive
        };
        let reload_per_request = parse_bool("VITRINE_RELOAD_PER_REQUEST", false)?;

        Ok(Self {
            host,
            port,
            catalog_path,
            orders_path,
            images_dir,
            validation_mode,
            reload_per_request,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse a boolean environment variable, accepting `true/false/1/0`.
fn parse_bool(key: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(key) {
        Err(_) => Ok(default),
        Ok(value) => match value.as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(ConfigError::InvalidEnvVar(
                key.to_owned(),
                format!("expected true/false/1/0, got {other}"),
            )),
        },
    }
}
