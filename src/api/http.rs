//! HTTP transport
//!
//! The trait seam between the API client and the network, plus the
//! production implementation over reqwest. Tests substitute their own
//! [`Transport`] with canned responses.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use tracing::debug;

use super::error::TransportError;
use crate::config::Config;

/// Abstract "perform an HTTP GET and return a JSON value" capability
///
/// `query` holds already-resolved key/value pairs; parameters with absent
/// values are dropped by the caller before they reach the transport.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a GET against `path` (relative to the transport's base URL)
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, TransportError>;
}

/// Production transport over a shared reqwest client
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Build a transport with the GitHub v3 Accept header preconfigured
    pub fn new(config: &Config) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, TransportError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "GET");

        let response = self.client.get(&url).query(query).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            // Keep whatever error body the server sent; it names the reason
            // ("validation failed", rate limiting, ...) better than the code.
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Http { status, body });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
