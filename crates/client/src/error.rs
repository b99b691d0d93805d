//! Error types for the paste backend client.

use thiserror::Error;

/// Errors produced by [`crate::PasteClient`].
///
/// Variants mirror the backend's status contract:
/// - 404 → [`ClientError::NotFound`] (never stored, already burned, or
///   swept by the expiry job)
/// - 410 → [`ClientError::Expired`]
/// - any other non-2xx → [`ClientError::Api`]
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The paste does not exist, was burned after reading, or was deleted.
    #[error("paste not found")]
    NotFound,

    /// The paste exists but its expiry time has passed.
    #[error("paste has expired")]
    Expired,

    /// The backend returned an unexpected error status.
    #[error("backend returned status {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the backend's error body, when parseable.
        message: String,
    },

    /// Transport-level failure: connection, timeout, or body decoding.
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),
}
