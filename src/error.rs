//! Error types for zget
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using ZgetError
pub type Result<T> = std::result::Result<T, ZgetError>;

/// Unified error type for zget operations
#[derive(Debug, Error)]
pub enum ZgetError {
    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Payload is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    // -------------------------------------------------------------------------
    // Caller Errors
    // -------------------------------------------------------------------------
    #[error("Usage error: {0}")]
    Usage(String),
}

impl ZgetError {
    /// Classify an I/O error from the socket into the zget taxonomy.
    ///
    /// Timeout kinds map to [`ZgetError::Timeout`] (Windows reports `TimedOut`,
    /// Unix reports `WouldBlock` once a socket timeout is set); everything else
    /// is a connection-level failure.
    pub fn from_io(context: &str, err: std::io::Error) -> Self {
        use std::io::ErrorKind;

        match err.kind() {
            ErrorKind::WouldBlock | ErrorKind::TimedOut => {
                ZgetError::Timeout(format!("{context}: {err}"))
            }
            _ => ZgetError::Connection(format!("{context}: {err}")),
        }
    }
}
