//! # Mock Transport
//!
//! A scripted implementation of the [`Transport`] seam for tests. Expected
//! requests are declared up front with a fluent builder, the code under test
//! runs against the mock, and `verify()` asserts every expectation was
//! consumed. Unexpected URLs panic, failing the test immediately.
//!
//! ```rust
//! use hal_relations::mock::MockTransport;
//! use hal_relations::transport::Transport;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let transport = MockTransport::new();
//!     transport
//!         .expect_get("/books/2")
//!         .return_json(200, json!({ "id": 2 }));
//!
//!     let response = transport.get("/books/2").await.unwrap();
//!     assert!(response.is_success());
//!     transport.verify();
//! }
//! ```

use crate::error::Error;
use crate::transport::{FetchResponse, Transport};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

enum Outcome {
    Response(FetchResponse),
    Error(String),
}

struct Expectation {
    url: String,
    outcome: Outcome,
}

/// A scripted transport: GETs are served by URL from the expectation queue.
///
/// Cheap to clone; clones share the queue, so a test can keep one handle for
/// `verify()` while the engine owns another.
#[derive(Clone, Default)]
pub struct MockTransport {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a GET for `url`; chain a `return_*` call to script the
    /// outcome.
    pub fn expect_get(&self, url: &str) -> GetExpectationBuilder<'_> {
        GetExpectationBuilder {
            url: url.to_string(),
            transport: self,
        }
    }

    /// Panics if any scripted expectation was not consumed.
    pub fn verify(&self) {
        let expectations = self.expectations.lock().unwrap();
        if !expectations.is_empty() {
            panic!(
                "not all expected requests were issued, {} remaining",
                expectations.len()
            );
        }
    }
}

/// Builder for a single scripted GET.
pub struct GetExpectationBuilder<'a> {
    url: String,
    transport: &'a MockTransport,
}

impl GetExpectationBuilder<'_> {
    /// Scripts a JSON response with the given status.
    pub fn return_json(self, status: u16, body: Value) {
        self.push(Outcome::Response(FetchResponse {
            status,
            body: Some(body),
        }));
    }

    /// Scripts a bodyless response, e.g. a 404.
    pub fn return_status(self, status: u16) {
        self.push(Outcome::Response(FetchResponse { status, body: None }));
    }

    /// Scripts a connection-level failure.
    pub fn return_error(self, message: &str) {
        self.push(Outcome::Error(message.to_string()));
    }

    fn push(self, outcome: Outcome) {
        self.transport
            .expectations
            .lock()
            .unwrap()
            .push_back(Expectation {
                url: self.url,
                outcome,
            });
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<FetchResponse, Error> {
        // Matched by URL rather than queue position: concurrent fetches may
        // reach the mock in any order.
        let expectation = {
            let mut expectations = self.expectations.lock().unwrap();
            let position = expectations.iter().position(|e| e.url == url);
            position.and_then(|i| expectations.remove(i))
        };
        match expectation {
            Some(expectation) => match expectation.outcome {
                Outcome::Response(response) => Ok(response),
                Outcome::Error(message) => Err(Error::Transport(message.into())),
            },
            None => panic!("unexpected GET {url}"),
        }
    }
}
