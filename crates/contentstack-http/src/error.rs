//! Transport errors.

use http::header::InvalidHeaderValue;

/// Errors that can occur while exchanging a request with the server.
///
/// A response with a non-success status is not an error at this layer.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The request could not be sent or the response could not be read.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A header value contained characters not allowed on the wire.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

/// Result type alias for transport operations.
pub type HttpResult<T> = Result<T, HttpError>;
