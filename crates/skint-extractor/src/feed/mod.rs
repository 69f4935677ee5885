//! Feed retrieval and RSS parsing.

mod parse;

use std::time::Duration;

use reqwest::Client;

use crate::error::NetworkError;

pub use parse::{parse_feed, parse_items};

/// HTTP client for the source feed.
///
/// Makes exactly one GET per [`FeedFetcher::fetch`] call; there is no retry
/// layer, so a failed fetch ends the run.
pub struct FeedFetcher {
    client: Client,
}

impl FeedFetcher {
    /// Creates a fetcher with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, NetworkError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the raw feed body from `url`.
    ///
    /// # Errors
    ///
    /// - [`NetworkError::UnexpectedStatus`] for any non-2xx response.
    /// - [`NetworkError::Http`] on transport failure or an unreadable body.
    pub async fn fetch(&self, url: &str) -> Result<String, NetworkError> {
        let response = self
            .client
            .get(url)
            .header(
                reqwest::header::ACCEPT,
                "application/rss+xml, application/xml;q=0.9, text/xml;q=0.8, */*;q=0.1",
            )
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(url, bytes = body.len(), "fetched feed");
        Ok(body)
    }
}
