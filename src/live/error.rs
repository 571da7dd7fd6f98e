//! Live polling error types

use thiserror::Error;

/// Errors a single poll tick can end with. None of them stop the poller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LiveError {
    /// Transport failed before a response arrived
    #[error("Network error: {0}")]
    Request(String),

    /// Server answered with a non-success status
    #[error("Score endpoint returned HTTP {status}")]
    Status { status: u16 },

    /// Body was not a valid score snapshot
    #[error("Parse error: {0}")]
    Decode(String),

    /// Request exceeded the client timeout
    #[error("Request timed out")]
    Timeout,

    /// Score server could not be reached
    #[error("Score server unavailable")]
    Unavailable,
}

impl From<serde_json::Error> for LiveError {
    fn from(err: serde_json::Error) -> Self {
        LiveError::Decode(err.to_string())
    }
}

/// Result type alias for poll operations
pub type LiveResult<T> = Result<T, LiveError>;
