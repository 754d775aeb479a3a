//! The [`Transport`] trait and the reqwest-backed implementation.

use std::time::Duration;

use http::Method;
use http::header::CONTENT_TYPE;

use crate::error::HttpResult;
use crate::message::{ATOM_CONTENT_TYPE, HttpRequest, HttpResponse};

/// Sends requests and returns responses, blocking the caller.
///
/// Only [`execute`](Self::execute) must be implemented; the verb helpers attach
/// the Atom content type and the `Authorization` header the API expects.
pub trait Transport {
    /// Send `request` and wait for the full response.
    ///
    /// # Errors
    ///
    /// Returns `HttpError` when the exchange itself fails. Non-success status
    /// codes are returned as responses.
    fn execute(&self, request: HttpRequest) -> HttpResult<HttpResponse>;

    /// `GET uri` with an `Authorization` header.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    fn get(&self, uri: &str, auth: &str) -> HttpResult<HttpResponse> {
        self.execute(HttpRequest::new(Method::GET, uri).with_authorization(auth)?)
    }

    /// `POST uri` with an Atom body.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    fn post(&self, uri: &str, body: &str, auth: &str) -> HttpResult<HttpResponse> {
        self.execute(
            HttpRequest::new(Method::POST, uri)
                .with_authorization(auth)?
                .with_body(ATOM_CONTENT_TYPE, body),
        )
    }

    /// `PUT uri` with an Atom body.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    fn put(&self, uri: &str, body: &str, auth: &str) -> HttpResult<HttpResponse> {
        self.execute(
            HttpRequest::new(Method::PUT, uri)
                .with_authorization(auth)?
                .with_body(ATOM_CONTENT_TYPE, body),
        )
    }

    /// `DELETE uri`.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    fn delete(&self, uri: &str, auth: &str) -> HttpResult<HttpResponse> {
        self.execute(HttpRequest::new(Method::DELETE, uri).with_authorization(auth)?)
    }

    /// `POST uri` with form-encoded fields and no authorization.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> HttpResult<HttpResponse> {
        self.execute(HttpRequest::new(Method::POST, uri).with_form(fields))
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> HttpResult<HttpResponse> {
        (**self).execute(request)
    }
}

/// Blocking reqwest client.
///
/// Redirects are followed; the timeout covers the whole exchange.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Build a transport sending `user_agent` and giving up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `HttpError::Request` if the TLS backend cannot be initialized.
    pub fn new(user_agent: &str, timeout: Duration) -> HttpResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent.to_owned())
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    #[must_use]
    pub fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: HttpRequest) -> HttpResult<HttpResponse> {
        tracing::debug!(method = %request.method, uri = %request.uri, "sending request");

        let mut builder = self
            .client
            .request(request.method, &request.uri)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        let response = builder.send()?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned);
        let body = response.text()?;

        tracing::debug!(status = %status, bytes = body.len(), "received response");
        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}
