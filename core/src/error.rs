//! Error types for the item API client.
//!
//! 404 and 400 get their own variants carrying the server's `Error` message.
//! Any other unexpected status lands in `HttpError` with the raw body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("not found: {0}")]
    NotFound(String),

    /// The server returned 400; the payload was missing a field or malformed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
