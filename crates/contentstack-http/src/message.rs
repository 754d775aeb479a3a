//! Request and response values.

use http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use http::{HeaderMap, Method, StatusCode};

use crate::error::HttpResult;

/// Content type of Atom request bodies.
pub const ATOM_CONTENT_TYPE: &str = "application/atom+xml";

/// Content type of form-encoded request bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// An outgoing request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute request URI, query included.
    pub uri: String,
    /// Request headers.
    pub headers: HeaderMap,
    /// Request body, if any.
    pub body: Option<String>,
}

impl HttpRequest {
    /// A request with no headers and no body.
    pub fn new(method: Method, uri: impl Into<String>) -> Self {
        Self {
            method,
            uri: uri.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Attach an `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns `HttpError::InvalidHeader` if `value` is not a valid header value.
    pub fn with_authorization(mut self, value: &str) -> HttpResult<Self> {
        let mut value = HeaderValue::from_str(value)?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(self)
    }

    /// Attach a body with the given content type.
    #[must_use]
    pub fn with_body(mut self, content_type: &'static str, body: impl Into<String>) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        self.body = Some(body.into());
        self
    }

    /// Attach form fields as an `application/x-www-form-urlencoded` body.
    #[must_use]
    pub fn with_form(self, fields: &[(&str, &str)]) -> Self {
        let body = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();
        self.with_body(FORM_CONTENT_TYPE, body)
    }

    /// Value of header `name` as text, if present and printable.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// A received response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code.
    pub status: StatusCode,
    /// The `Content-Type` header, if any.
    pub content_type: Option<String>,
    /// Raw body text.
    pub body: String,
}

impl HttpResponse {
    /// A response with the given status and body and no content type.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: None,
            body: body.into(),
        }
    }

    /// An Atom response with the given status.
    pub fn atom(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            content_type: Some(ATOM_CONTENT_TYPE.to_owned()),
            ..Self::new(status, body)
        }
    }

    /// Whether the status is exactly `200 OK`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
