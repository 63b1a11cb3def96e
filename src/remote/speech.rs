use std::io::Cursor;

use rodio::{Decoder, OutputStream, Sink};

use crate::drill_engine::DrillError;

/// Client for the speech-synthesis endpoint: fetches spoken audio for a
/// single word and plays it on the default output device.
///
/// The endpoint receives the target word and language tag in the query
/// string; the response body is treated as a playable audio clip.
#[derive(Clone)]
pub struct SpeechClient {
    url: String,
    lang: String,
    client: reqwest::Client,
}

impl SpeechClient {
    pub fn new(url: impl Into<String>, lang: impl Into<String>) -> Self {
        SpeechClient {
            url: url.into(),
            lang: lang.into(),
            client: super::create_http_client(),
        }
    }

    /// Fetch the synthesized audio for `word` and play it to completion.
    ///
    /// Playback runs on a blocking worker thread; the future resolves once
    /// the clip has finished. Any fetch, decode, or device failure is a
    /// [`DrillError::SpeechFailed`].
    pub async fn speak(&self, word: &str) -> Result<(), DrillError> {
        let audio = self.fetch(word).await?;
        tokio::task::spawn_blocking(move || play(audio))
            .await
            .map_err(|e| DrillError::SpeechFailed(e.to_string()))?
    }

    /// Download the raw audio bytes for `word`.
    pub async fn fetch(&self, word: &str) -> Result<Vec<u8>, DrillError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("q", word),
                ("tl", self.lang.as_str()),
                ("total", "1"),
                ("idx", "0"),
            ])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| DrillError::SpeechFailed(e.to_string()))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DrillError::SpeechFailed(e.to_string()))?;

        tracing::info!("fetched {} bytes of speech audio for '{word}'", bytes.len());
        Ok(bytes.to_vec())
    }
}

/// Blocking playback of an in-memory audio clip.
fn play(audio: Vec<u8>) -> Result<(), DrillError> {
    let (_stream, handle) =
        OutputStream::try_default().map_err(|e| DrillError::SpeechFailed(e.to_string()))?;
    let sink = Sink::try_new(&handle).map_err(|e| DrillError::SpeechFailed(e.to_string()))?;
    let source =
        Decoder::new(Cursor::new(audio)).map_err(|e| DrillError::SpeechFailed(e.to_string()))?;

    sink.append(source);
    sink.sleep_until_end();
    Ok(())
}
