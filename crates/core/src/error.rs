//! Error types for candidate extraction
//!
//! This module defines the error types surfaced by extraction calls.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Backend failures are fatal to the extraction call that hit them: the
//! caller sees the error, remaining search units are not processed, and no
//! partial result is delivered. An empty result set is NOT an error.

use thiserror::Error;

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for candidate extraction
#[derive(Debug, Error)]
pub enum Error {
    /// Search backend could not be reached (connection failure, node down)
    #[error("search backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Backend rejected the query as malformed
    #[error("query rejected by backend: {0}")]
    QueryRejected(String),
}
