//! Error types for the Estante client

use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, SyncError>;

/// Failure of a synchronizer operation
#[derive(Error, Debug)]
pub enum SyncError {
    /// Local validation failure; never reaches the network
    #[error("{0}")]
    Validation(String),

    /// Transport failure or remote rejection
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Failure at the transport seam
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status} for {operation}")]
    Status {
        operation: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}
