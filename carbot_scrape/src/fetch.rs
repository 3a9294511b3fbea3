//! Page fetching via the MediaWiki parse API.
//!
//! One request per run, at startup. There is no retry or backoff: if
//! the page cannot be fetched the tool has nothing to answer with and
//! startup aborts.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

use crate::error::{Error, Result};

/// Fetcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// MediaWiki API endpoint
    #[serde(default = "FetchConfig::default_endpoint")]
    pub endpoint: String,

    /// Request timeout (seconds)
    #[serde(default = "FetchConfig::default_timeout")]
    pub timeout: u64,

    /// User-Agent header
    #[serde(default = "FetchConfig::default_user_agent")]
    pub user_agent: String,

    /// Maximum rendered-page size (bytes)
    #[serde(default = "FetchConfig::default_max_size")]
    pub max_size: usize,
}

impl FetchConfig {
    fn default_endpoint() -> String {
        "https://en.wikipedia.org/w/api.php".to_string()
    }

    const fn default_timeout() -> u64 {
        15
    }

    fn default_user_agent() -> String {
        "Mozilla/5.0 (compatible; carbot/0.1)".to_string()
    }

    const fn default_max_size() -> usize {
        8_000_000 // 8MB; list pages render large
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::default_endpoint(),
            timeout: Self::default_timeout(),
            user_agent: Self::default_user_agent(),
            max_size: Self::default_max_size(),
        }
    }
}

/// Source of rendered page HTML, keyed by page title. The trait seam
/// lets the chat layer run against fixture HTML in tests.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn page_html(&self, title: &str) -> Result<String>;
}

/// `action=parse` response envelope (formatversion 2).
#[derive(Debug, Deserialize)]
struct ParseResponse {
    parse: Option<ParsePayload>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ParsePayload {
    title: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    info: String,
}

/// MediaWiki page fetcher.
pub struct WikiFetcher {
    client: Client,
    config: FetchConfig,
}

impl WikiFetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl PageSource for WikiFetcher {
    async fn page_html(&self, title: &str) -> Result<String> {
        info!("Fetching page '{}' from {}", title, self.config.endpoint);

        let response: ParseResponse = self
            .client
            .get(&self.config.endpoint)
            .header("User-Agent", &self.config.user_agent)
            .query(&[
                ("action", "parse"),
                ("page", title),
                ("prop", "text"),
                ("format", "json"),
                ("formatversion", "2"),
                ("redirects", "1"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(err) = response.error {
            if err.code == "missingtitle" {
                return Err(Error::PageNotFound(title.to_string()));
            }
            return Err(Error::Api {
                code: err.code,
                info: err.info,
            });
        }

        let payload = response
            .parse
            .ok_or_else(|| Error::Malformed("neither parse nor error in response".to_string()))?;

        if payload.text.len() > self.config.max_size {
            return Err(Error::TooLarge {
                size: payload.text.len(),
                max: self.config.max_size,
            });
        }

        info!(
            "Fetched '{}' ({} bytes of rendered HTML)",
            payload.title,
            payload.text.len()
        );
        Ok(payload.text)
    }
}
