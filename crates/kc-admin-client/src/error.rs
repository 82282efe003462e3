//! Admin client error types.

use thiserror::Error;

/// Admin client error type.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Non-success response from the admin API.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, or a placeholder when unreadable.
        message: String,
    },

    /// Authentication error (token exchange did not yield a usable session).
    #[error("authentication error: {0}")]
    Auth(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A response body could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Admin client result type.
pub type AdminResult<T> = Result<T, AdminError>;
