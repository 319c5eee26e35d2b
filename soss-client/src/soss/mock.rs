//! Mock transport for testing without network access.
//!
//! Serves canned response bodies keyed by URL, as if they came from the
//! live SOSS and CAFCP endpoints.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::error::SossError;
use super::transport::Transport;

/// A canned response: a body, or an error status.
#[derive(Debug, Clone)]
enum Canned {
    Body(String),
    Status(u16),
}

/// Mock transport that serves registered responses.
///
/// Requests for unregistered URLs fail with a 404 `Api` error. Every request
/// is recorded so tests can check what was fetched.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    responses: HashMap<String, Canned>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    /// Create a mock with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`.
    pub fn with_response(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses.insert(url.into(), Canned::Body(body.into()));
        self
    }

    /// Fail requests for `url` with the given HTTP status.
    pub fn with_failure(mut self, url: impl Into<String>, status: u16) -> Self {
        self.responses.insert(url.into(), Canned::Status(status));
        self
    }

    /// URLs requested so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// Number of requests made for `url`.
    pub fn request_count(&self, url: &str) -> usize {
        self.requests().iter().filter(|r| *r == url).count()
    }
}

impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<String, SossError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        match self.responses.get(url) {
            Some(Canned::Body(body)) => Ok(body.clone()),
            Some(Canned::Status(status)) => Err(SossError::Api {
                url: url.to_string(),
                status: *status,
                message: "mock failure".to_string(),
            }),
            None => Err(SossError::Api {
                url: url.to_string(),
                status: 404,
                message: format!(
                    "no mock response. Available: {:?}",
                    self.responses.keys().collect::<Vec<_>>()
                ),
            }),
        }
    }
}
