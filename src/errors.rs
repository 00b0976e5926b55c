//! Unified error types for `Stockroom`.
//!
//! The error taxonomy distinguishes the three ways a round trip to the
//! product API can fail - transport, unexpected status, malformed body -
//! so diagnostics can tell them apart even though the view-model handles
//! all three the same way.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong while loading configuration
        message: String,
    },

    /// The request never completed (connection refused, DNS, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus {
        /// HTTP status code returned by the server
        status: u16,
        /// The request URL that produced it
        url: String,
    },

    /// The response body was not the JSON shape we expected
    #[error("Malformed response body: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// I/O error, e.g. while reading terminal input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable lookup failed
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
