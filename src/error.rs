//! Error types for meteoq
//!
//! Provides a unified error type for all operations.
//!
//! Bad requests are deliberately not represented here: the server maps them
//! onto wire status codes, so `parse_request` returns a value-level
//! [`RequestOutcome`](crate::protocol::RequestOutcome) instead of an error.

use thiserror::Error;

/// Result type alias using MeteoError
pub type Result<T> = std::result::Result<T, MeteoError>;

/// Unified error type for meteoq operations
#[derive(Debug, Error)]
pub enum MeteoError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Response Codec Errors
    // -------------------------------------------------------------------------
    #[error("truncated response: expected {expected} bytes, got {got}")]
    TruncatedResponse { expected: usize, got: usize },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("response buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("configuration error: {0}")]
    Config(String),
}
