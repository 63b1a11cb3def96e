//! Application configuration: endpoint URLs and storage locations.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

/// User-tunable settings, stored as JSON in the platform config directory.
///
/// Every field carries a default so an old or hand-trimmed document still
/// loads cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote word-list endpoint (JSON array of word records).
    #[serde(default = "default_word_list_url")]
    pub word_list_url: String,
    /// Speech-synthesis endpoint; the target word goes in the query string.
    #[serde(default = "default_speech_url")]
    pub speech_url: String,
    /// Language tag passed to the speech endpoint.
    #[serde(default = "default_speech_lang")]
    pub speech_lang: String,
    /// Overrides the platform-default location of the words document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words_path: Option<PathBuf>,
}

fn default_word_list_url() -> String {
    "https://example.com/words.json".to_string()
}

fn default_speech_url() -> String {
    "https://translate.google.com/translate_tts".to_string()
}

fn default_speech_lang() -> String {
    "en".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            word_list_url: default_word_list_url(),
            speech_url: default_speech_url(),
            speech_lang: default_speech_lang(),
            words_path: None,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("no platform config directory")?;
        Ok(dir.join("SpellingDrill").join("config.json"))
    }

    /// Load the config, falling back to defaults when no file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Write the config atomically (temp file + rename).
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let temp = NamedTempFile::new_in(parent)?;
        let mut writer = std::io::BufWriter::new(&temp);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        drop(writer);
        temp.persist(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Where the words document lives: the configured override, or the
    /// platform data directory.
    pub fn words_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.words_path {
            return Ok(path.clone());
        }
        let dir = dirs::data_dir().context("no platform data directory")?;
        Ok(dir.join("SpellingDrill").join("words.json"))
    }
}
