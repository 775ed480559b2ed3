// crates/network/src/client.rs
//! HTTP client wrapper for fetching source pages

use crate::error::{NetworkError, NetworkResult};
use reqwest::{Client as ReqwestClient, Url};
use std::time::Duration;

/// Browser-like user agent; some hosts reject obvious bots
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Maximum redirects to follow
    pub max_redirects: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: 10,
        }
    }
}

/// HTTP client that performs a single GET per call
#[derive(Debug, Clone)]
pub struct Client {
    inner: ReqwestClient,
    config: ClientConfig,
}

impl Client {
    /// Creates a new client with default configuration
    pub fn new() -> NetworkResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> NetworkResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(NetworkError::Build)?;

        Ok(Self {
            inner: client,
            config,
        })
    }

    /// Returns the configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches `url` and returns the response body as text
    ///
    /// Succeeds only on a 2xx status. The body is decoded using the charset
    /// from the response headers, falling back to UTF-8.
    pub async fn fetch_text(&self, url: &str) -> NetworkResult<String> {
        let parsed = Url::parse(url).map_err(|e| NetworkError::InvalidUrl(format!("{url}: {e}")))?;

        log::debug!("GET {} (timeout {:?})", parsed, self.config.timeout);

        let response = self
            .inner
            .get(parsed)
            .send()
            .await
            .map_err(|e| NetworkError::from_request(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| NetworkError::from_request(url, e))?;

        log::debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
