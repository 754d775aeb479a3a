//! Client error types.

use contentstack_atom::XmlError;
use contentstack_auth::AuthError;
use contentstack_http::HttpError;
use contentstack_model::ModelError;

/// Errors raised by [`ContentClient`](crate::client::ContentClient).
///
/// Errors reported by the server in an `errors` payload are not listed here:
/// they come back as data in the parsed document.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An authenticated operation was called before a token was set.
    #[error("client is not authenticated")]
    Unauthenticated,

    /// A delete answered with a status other than 200.
    #[error("delete request failed with status {status}")]
    DeleteFailed {
        /// HTTP status of the response.
        status: u16,
    },

    /// An update or delete needs the entry's edit link and it has none.
    #[error("entry has no edit link")]
    MissingEditLink,

    /// The HTTP exchange failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Login failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The response body could not be turned into a view.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A request body could not be serialized.
    #[error(transparent)]
    Xml(#[from] XmlError),
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
