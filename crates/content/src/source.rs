//! Where page content comes from.
//!
//! [`ContentSource`] returns the raw JSON body for a page endpoint.
//! [`HttpContentSource`] is the production implementation, a thin wrapper
//! over [`reqwest`] against the content API.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ContentError;

/// A provider of raw page bodies, keyed by endpoint path segment.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch and decode the body served for `endpoint`.
    async fn fetch(&self, endpoint: &str) -> Result<Value, ContentError>;
}

/// HTTP client for the content API.
///
/// Uses the transport's default timeouts. There are no retries: a failed
/// request means the page renders its defaults.
pub struct HttpContentSource {
    client: reqwest::Client,
    api_url: String,
}

impl HttpContentSource {
    /// Create a client for the content API.
    ///
    /// * `api_url` - Base URL, e.g. `https://deccanservices.demovoting.com/api`.
    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.api_url, endpoint.trim_start_matches('/'))
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch(&self, endpoint: &str) -> Result<Value, ContentError> {
        let url = self.endpoint_url(endpoint);
        tracing::debug!(%url, "Fetching page content");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::HttpStatus(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
