//! HTTP transport for the Tripadvisor Content API
//!
//! The service talks to the network only through the [`Transport`] trait, so
//! tests and callers can substitute their own implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Upper bound on a single upstream request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Errors that can occur while talking to the upstream API
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server answered with a non-2xx status
    #[error("HTTP status {0}")]
    Status(u16),

    /// HTTP request failed (connection, timeout, or body read)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse the response body as JSON
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The endpoint path could not be joined onto the base URL
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// A GET-with-query capability returning the decoded JSON body
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues one GET request; any non-2xx status is an error
    async fn get_json(&self, url: Url, query: &[(&str, &str)]) -> Result<Value, TransportError>;
}

/// [`Transport`] backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    /// Create a transport with a fresh client and the default timeout
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// Create a transport with a custom HTTP client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            timeout: REQUEST_TIMEOUT,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: Url, query: &[(&str, &str)]) -> Result<Value, TransportError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
