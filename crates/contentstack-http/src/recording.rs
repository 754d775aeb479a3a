//! An in-memory [`Transport`] for tests.
//!
//! Responses are replayed in the order they were queued. Every request is kept
//! so tests can assert on the method, URI, headers and body that were sent.

use std::cell::RefCell;
use std::collections::VecDeque;

use http::StatusCode;

use crate::error::HttpResult;
use crate::message::{HttpRequest, HttpResponse};
use crate::transport::Transport;

/// A transport that never touches the network.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    responses: RefCell<VecDeque<HttpResponse>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl RecordingTransport {
    /// A transport with no queued responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `response` to answer the next unanswered request.
    #[must_use]
    pub fn respond(self, response: HttpResponse) -> Self {
        self.responses.borrow_mut().push_back(response);
        self
    }

    /// Queue a response after construction.
    pub fn push_response(&self, response: HttpResponse) {
        self.responses.borrow_mut().push_back(response);
    }

    /// Every request sent so far.
    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    /// The most recent request.
    #[must_use]
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }
}

impl Transport for RecordingTransport {
    /// Record `request` and replay the next queued response.
    ///
    /// With nothing queued, answers `404 Not Found` with an empty body.
    fn execute(&self, request: HttpRequest) -> HttpResult<HttpResponse> {
        self.requests.borrow_mut().push(request);
        let response = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| HttpResponse::new(StatusCode::NOT_FOUND, ""));
        Ok(response)
    }
}
