//! HTTP transport boundary for `ContentStack`.
//!
//! The client never talks to an HTTP library directly. It builds
//! [`HttpRequest`]s and hands them to a [`Transport`], which returns an
//! [`HttpResponse`] carrying the status, content type and raw body text.
//!
//! - [`ReqwestTransport`]: the production transport, a blocking reqwest client
//! - [`RecordingTransport`]: an in-memory transport that replays canned
//!   responses and records every request, for tests

pub mod error;
pub mod message;
pub mod recording;
pub mod transport;

pub use error::{HttpError, HttpResult};
pub use message::{ATOM_CONTENT_TYPE, FORM_CONTENT_TYPE, HttpRequest, HttpResponse};
pub use recording::RecordingTransport;
pub use transport::{ReqwestTransport, Transport};
