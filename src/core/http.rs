//! Rate-limited HTTP fetching for the NHL stats API

use crate::{error::StatsError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::debug;

/// Base path for the public NHL stats API.
pub const API_BASE: &str = "https://statsapi.web.nhl.com/api/v1";

/// Delay applied before every request to stay under the upstream rate limit.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Connection settings for [`RateLimitedFetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    pub base_url: String,
    pub delay: Duration,
}

impl FetcherConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Reject base URLs that reqwest could never reach.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.starts_with("http://") || self.base_url.starts_with("https://") {
            Ok(())
        } else {
            Err(StatsError::InvalidBaseUrl {
                url: self.base_url.clone(),
            })
        }
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE.to_string(),
            delay: DEFAULT_DELAY,
        }
    }
}

/// Headers sent with every API request.
pub fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Issues GET requests after a fixed delay and decodes the JSON body.
///
/// There is no retry and no timeout: a hung request hangs the caller.
#[derive(Debug)]
pub struct RateLimitedFetcher {
    client: Client,
    config: FetcherConfig,
    requests: AtomicUsize,
}

impl RateLimitedFetcher {
    pub fn new(config: FetcherConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder().default_headers(default_headers()).build()?;
        Ok(Self {
            client,
            config,
            requests: AtomicUsize::new(0),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn delay(&self) -> Duration {
        self.config.delay
    }

    /// Number of requests issued so far, successful or not.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }

    /// Wait out the configured delay, GET `url` with `query` and decode the body as `T`.
    ///
    /// Transport failures and non-success statuses surface as
    /// [`StatsError::Http`]; undecodable bodies as [`StatsError::Json`].
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        if !self.config.delay.is_zero() {
            tokio::time::sleep(self.config.delay).await;
        }

        self.requests.fetch_add(1, Ordering::Relaxed);
        debug!(url, ?query, "GET");

        let body = self
            .client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }
}
