//! XML error types.
//!
//! This module provides the [`XmlError`] type for failures while reading or
//! writing Atom documents. Accessor reads never fail; only parsing and
//! serialization produce these errors.

use std::io;

/// Errors that can occur while parsing or serializing an Atom document.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// An error from quick-xml attribute handling.
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Element or attribute names were not valid UTF-8.
    #[error("invalid UTF-8 in XML: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// An element used a prefix with no namespace declaration in scope.
    #[error("unbound namespace prefix: {0}")]
    UnboundPrefix(String),

    /// An entity reference that is neither predefined nor a character reference.
    #[error("unknown entity reference: &{0};")]
    UnknownEntity(String),

    /// An error decoding or unescaping text content.
    #[error("failed to parse value: {0}")]
    ParseError(String),

    /// The payload contained no root element.
    #[error("missing root element")]
    MissingRoot,

    /// The payload contained more than one top-level element.
    #[error("multiple root elements: found <{0}> after the document element")]
    MultipleRoots(String),

    /// The payload ended inside an open element.
    #[error("unexpected EOF inside <{0}>")]
    UnexpectedEof(String),
}

/// Convenience result type for XML operations.
pub type XmlResult<T> = Result<T, XmlError>;
