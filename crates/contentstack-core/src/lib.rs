//! Content API for Shopping client for `ContentStack`.
//!
//! This crate ties the Atom views of `contentstack-model` to the wire: it
//! builds resource URIs for a merchant, logs in through ClientLogin, and
//! sends product, managed-account and datafeed requests over a blocking
//! transport. Responses are parsed into the dispatcher enums, so a server
//! that answers with an `errors` document yields data rather than a Rust
//! error.
//!
//! # Architecture
//!
//! ```text
//! ContentClient (operations, batch helpers)
//!        |
//!        v
//! ResourceUris + Query (URI layout, paging, write flags)
//!        |
//!        v
//! Transport (reqwest, or recorded responses in tests)
//!        |
//!        v
//! parse / parse_managed_accounts / parse_datafeeds
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod uri;

pub use client::ContentClient;
pub use config::{ClientConfig, DEFAULT_BASE_URI};
pub use error::{ClientError, ClientResult};
pub use uri::{Query, ResourceUris};
