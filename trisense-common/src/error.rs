//! Common error types for TriSense

use thiserror::Error;

/// Common result type for TriSense operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the TriSense admin tooling
#[derive(Error, Debug)]
pub enum Error {
    /// Network-level failure (connection refused, DNS, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-2xx HTTP response; `detail` carries the backend's JSON
    /// `detail` field verbatim when present, otherwise the raw body
    #[error("API error {status}: {detail}")]
    Api { status: u16, detail: String },

    /// Invalid operator input, caught before any network call
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Response body could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}
