//! Authentication error types.

use contentstack_http::HttpError;

/// Errors that can occur during the credential exchange.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The login request could not be exchanged.
    #[error("login transport failed: {0}")]
    Transport(#[from] HttpError),

    /// The endpoint refused the credentials.
    #[error("login rejected with status {status}: {reason}")]
    Rejected {
        /// HTTP status of the login response.
        status: u16,
        /// The `Error` field of the response, e.g. `BadAuthentication`.
        reason: String,
    },

    /// The endpoint answered 200 but sent no `Auth` field.
    #[error("login response carried no Auth token")]
    MissingToken,
}
