//! Configuration loading for `Stockroom`.
//!
//! The only setting is the base URL of the product API server. It is
//! resolved in order: the `STOCKROOM_API_URL` environment variable, an
//! optional `config.toml` next to the binary, then the default local
//! server address.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Environment variable overriding the configured base URL.
pub const API_URL_ENV: &str = "STOCKROOM_API_URL";

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// API endpoint settings
    pub api: ApiConfig,
}

/// Settings for reaching the product API
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the server hosting `/api/products`
    pub base_url: String,
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Resolves the API base URL from the environment, `./config.toml`, or
/// the built-in default, in that order.
///
/// A missing config file falls through to the default; a present but
/// unparseable one is an error rather than something to silently skip.
pub fn resolve_base_url() -> Result<String> {
    if let Ok(url) = std::env::var(API_URL_ENV) {
        info!("Using API base URL from {API_URL_ENV}.");
        return Ok(url);
    }

    if Path::new("config.toml").exists() {
        let config = load_config("config.toml")?;
        info!("Using API base URL from config.toml.");
        return Ok(config.api.base_url);
    }

    info!("Using default API base URL {DEFAULT_BASE_URL}.");
    Ok(DEFAULT_BASE_URL.to_string())
}
