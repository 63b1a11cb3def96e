use std::time::Duration;

use crate::drill_engine::{DrillError, RemoteWord};

const MAX_RETRIES: u32 = 2;

/// Client for the published word list: an HTTP GET returning a JSON array
/// of objects, each carrying at least a `"word"` field.
#[derive(Clone)]
pub struct WordListClient {
    url: String,
    client: reqwest::Client,
    max_retries: u32,
}

impl WordListClient {
    pub fn new(url: impl Into<String>) -> Self {
        WordListClient {
            url: url.into(),
            client: super::create_http_client(),
            max_retries: MAX_RETRIES,
        }
    }

    /// Fetch and parse the remote list, retrying transient failures.
    ///
    /// Every failure comes back as [`DrillError::SyncFailed`]; nothing is
    /// merged until a payload has parsed successfully, so a failed fetch
    /// leaves the caller's local list untouched.
    pub async fn fetch(&self) -> Result<Vec<RemoteWord>, DrillError> {
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                tracing::warn!("retrying word list fetch ({attempt}/{})", self.max_retries);
                tokio::time::sleep(Duration::from_millis(500)).await;
            }

            match self.fetch_once().await {
                Ok(words) => return Ok(words),
                Err(e) => {
                    tracing::error!(
                        "word list fetch failed (attempt {}/{}): {e}",
                        attempt + 1,
                        self.max_retries + 1
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(DrillError::SyncFailed(
            last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown error".to_string()),
        ))
    }

    async fn fetch_once(&self) -> Result<Vec<RemoteWord>, reqwest::Error> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        let words = response.json::<Vec<RemoteWord>>().await?;
        tracing::info!("fetched {} remote words from {}", words.len(), self.url);
        Ok(words)
    }

    /// Cheap reachability probe against the word-list endpoint. Stands in
    /// for a platform connectivity signal: `true` means a sync is worth
    /// trying.
    pub async fn is_reachable(&self) -> bool {
        self.client
            .head(&self.url)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .is_ok()
    }
}
