//! Error types for kl_watch

use thiserror::Error;

/// Unified error type for kl_watch operations
#[derive(Debug, Error)]
pub enum WatchError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP error status code from the search endpoint
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// Snapshot file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Price snapshot could not be encoded or decoded
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Result could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Caller supplied parameters we cannot act on
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Every lookup in a batch failed at the network layer
    #[error("All {attempted} lookups failed, last error: {last_error}")]
    AllLookupsFailed {
        attempted: usize,
        last_error: Box<WatchError>,
    },
}

/// Short alias used by the crate-level re-export
pub type Error = WatchError;

/// Result alias for kl_watch operations
pub type Result<T> = std::result::Result<T, WatchError>;
