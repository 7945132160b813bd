//! Retrieval of raw feed text over HTTP.

use async_trait::async_trait;
use url::Url;

use crate::error::{EstadiaError, EstadiaResult};

/// Source of raw calendar-feed text.
///
/// The engine only ever needs this one operation, so callers (and tests)
/// can substitute anything that produces feed text for a URL.
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    async fn fetch(&self, feed_url: &str) -> EstadiaResult<String>;
}

/// Fetches feeds with a GET request over HTTP(S).
///
/// Holds a single [`reqwest::Client`] so connections are reused across
/// listings. Refresh cadence is the cache's concern, not this type's.
#[derive(Debug, Clone, Default)]
pub struct HttpFeedFetcher {
    client: reqwest::Client,
}

impl HttpFeedFetcher {
    pub fn new() -> Self {
        HttpFeedFetcher {
            client: reqwest::Client::new(),
        }
    }

    /// Use a preconfigured client (timeouts, proxy, user agent).
    pub fn with_client(client: reqwest::Client) -> Self {
        HttpFeedFetcher { client }
    }
}

#[async_trait]
impl FeedFetcher for HttpFeedFetcher {
    async fn fetch(&self, feed_url: &str) -> EstadiaResult<String> {
        let url = Url::parse(feed_url)
            .map_err(|e| EstadiaError::InvalidFeedUrl(format!("{feed_url}: {e}")))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| EstadiaError::FeedRequest(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EstadiaError::FeedFetch(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| EstadiaError::FeedRequest(e.to_string()))
    }
}
