//! HTTP client for Rotten Tomatoes pages
//!
//! A thin wrapper over `reqwest` with a bounded timeout and browser-like
//! headers. There is no retry, caching or throttling: a failed fetch is
//! returned to the caller, which decides whether to skip the record.

use std::future::Future;
use std::time::Duration;

use crate::error::{RtError, Result};

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default Accept-Language header
const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Source of raw page HTML.
///
/// [`RtClient`] is the HTTP implementation; tests substitute canned pages.
pub trait Fetch {
    /// Fetch the HTML body at an absolute URL.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// HTTP client for Rotten Tomatoes pages
pub struct RtClient {
    client: reqwest::Client,
}

impl RtClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            reqwest::header::HeaderValue::from_static(DEFAULT_ACCEPT_LANGUAGE),
        );

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client })
    }
}

impl Fetch for RtClient {
    /// # Errors
    /// - `RtError::NotFound` - Server returned 404
    /// - `RtError::HttpError` - Network error, timeout or any other non-2xx status
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.text().await?);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RtError::NotFound(url.to_string()));
        }

        match response.error_for_status() {
            Err(e) => Err(RtError::HttpError(e)),
            // 1xx/3xx that reqwest did not resolve; treat the body as the page
            Ok(response) => Ok(response.text().await?),
        }
    }
}
