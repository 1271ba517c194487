//! # HTTP Transport Seam
//!
//! The engine needs exactly one HTTP capability: `GET url -> (status, body)`.
//! It is modeled as a trait so resolution logic can run against the real
//! network or a scripted mock (see [`crate::mock`]). No other verbs, headers,
//! or retry behavior belong to this seam.

use crate::error::Error;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of a `GET`: the status code and, for success statuses, the decoded
/// JSON body.
///
/// Statuses outside 200-299 carry no body; the engine settles such fetches as
/// empty rather than failing them.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Option<Value>,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The single HTTP capability the engine requires.
///
/// Connection-level failures are `Err`; any response that actually arrived,
/// success or not, is `Ok`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<FetchResponse, Error>;
}

/// Production transport backed by `reqwest`.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }

    /// Wraps a preconfigured client, e.g. one carrying auth headers.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<FetchResponse, Error> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Transport(Box::new(e)))?;
        let status = response.status().as_u16();
        debug!(url, status, "GET");

        if !(200..300).contains(&status) {
            return Ok(FetchResponse { status, body: None });
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(Box::new(e)))?;
        let body = serde_json::from_str(&text)?;
        Ok(FetchResponse {
            status,
            body: Some(body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_range_is_2xx() {
        let ok = FetchResponse {
            status: 204,
            body: None,
        };
        let redirect = FetchResponse {
            status: 301,
            body: None,
        };
        let missing = FetchResponse {
            status: 404,
            body: Some(json!({ "error": "gone" })),
        };
        assert!(ok.is_success());
        assert!(!redirect.is_success());
        assert!(!missing.is_success());
    }
}
