//! Errors raised while turning payloads into views.

use contentstack_atom::XmlError;

/// Errors that can occur while loading an entity view from XML.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The payload is not well-formed XML.
    #[error("XML error: {0}")]
    Xml(#[from] XmlError),

    /// The root element is none of `entry`, `feed` or `errors`.
    #[error("unrecognized document kind: root element <{root}>")]
    UnrecognizedDocument {
        /// Local name of the offending root element.
        root: String,
    },
}

/// Result type alias for view loading.
pub type ModelResult<T> = Result<T, ModelError>;
