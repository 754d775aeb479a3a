//! ClientLogin authentication for `ContentStack`.
//!
//! The API authenticates with a one-shot credential exchange: an account email
//! and password are posted as a form to the ClientLogin endpoint, which answers
//! with `key=value` lines including an opaque `Auth` token. Every later request
//! carries that token as `Authorization: GoogleLogin auth={token}`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use contentstack_auth::{LoginParams, client_login};
//! use contentstack_http::ReqwestTransport;
//!
//! let transport = ReqwestTransport::new("contentstack", Duration::from_secs(30)).unwrap();
//! let token = client_login(&transport, &LoginParams::default(), "me@example.com", "secret").unwrap();
//! println!("{}", token.header_value());
//! ```
//!
//! # Modules
//!
//! - [`error`] - Authentication error types
//! - [`login`] - The credential exchange
//! - [`token`] - The bearer token and its header form

pub mod error;
pub mod login;
pub mod token;

pub use error::AuthError;
pub use login::{DEFAULT_LOGIN_URI, DEFAULT_SERVICE, LoginParams, client_login};
pub use token::AuthToken;
