//! Atom/XML data binding for `ContentStack`.
//!
//! This crate provides the XML layer for the Content API for Shopping. The API
//! exchanges Atom 1.0 entries and feeds extended with the GData batch,
//! structured-content (`sc`) and structured-content-products (`scp`)
//! namespaces.
//!
//! # Key components
//!
//! - [`Namespace`] and [`Tag`]: the closed registry of namespaces and qualified
//!   tags understood by the API
//! - [`Document`]: an owned, mutable, arena-backed element tree with
//!   [`parse`](Document::parse) and [`to_xml`](Document::to_xml)
//! - [`AtomElement`]: the accessor engine, a `(document, element)` pair
//!   exposing get / ensure / set / delete by qualified tag
//!
//! # Wire conventions
//!
//! - Elements are identified by `(namespace URI, local name)`, never by prefix
//! - Output is pretty-printed with two-space indentation and no XML declaration
//! - Whitespace-only text between elements is not significant

pub mod document;
pub mod element;
pub mod error;
pub mod ns;
mod reader;
pub mod tag;
mod writer;

pub use document::{Attribute, Descendants, Document, NamespaceDecl, NodeId};
pub use element::{AtomElement, SharedDocument};
pub use error::{XmlError, XmlResult};
pub use ns::Namespace;
pub use tag::{QualifiedTag, Tag};
