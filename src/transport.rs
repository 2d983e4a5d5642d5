//! HTTP transport abstraction.
//!
//! The client talks to the network through an injectable transport so tests
//! can observe the final URL/headers/body and return a synthetic response
//! without going through `reqwest`.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::time::Duration;

use crate::error::OpenRouterError;

/// Transport-level response data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body text
    pub body: String,
}

/// Custom HTTP transport for JSON POST requests.
///
/// This abstraction is scoped to the one request shape the client makes:
/// a JSON body POSTed to a single URL.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        headers: HeaderMap,
        body: Value,
    ) -> Result<HttpResponse, OpenRouterError>;
}

/// Production transport over a shared `reqwest::Client`.
///
/// The client is built once with the configured timeout; reqwest reuses
/// connections internally across calls.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, OpenRouterError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OpenRouterError::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        headers: HeaderMap,
        body: Value,
    ) -> Result<HttpResponse, OpenRouterError> {
        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(|e| OpenRouterError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| OpenRouterError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
