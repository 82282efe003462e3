//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A required local record is absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// A local record exists and overwriting was not granted.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The remote system rejected or failed a call.
    #[error(transparent)]
    Remote(#[from] kc_admin_client::AdminError),

    /// A stored or received document cannot be parsed as a valid record.
    #[error("malformed data: {0}")]
    MalformedData(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
