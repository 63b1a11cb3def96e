//! HTTP collaborators: the published word list and the speech endpoint.

mod speech;
mod words;

pub use speech::SpeechClient;
pub use words::WordListClient;

use std::time::Duration;

/// Standard HTTP client shared by both endpoints (30 s request timeout,
/// 10 s connect timeout).
pub(crate) fn create_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
