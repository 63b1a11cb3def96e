//! The crate-wide error taxonomy.
//!
//! Every failure a caller can meet is a named variant; no operation returns
//! a placeholder success value when something went wrong. The I/O and
//! network variants are recoverable — surface a status and keep the
//! in-memory list — while `EmptyList`, `UnknownWord`, and `NothingPresented`
//! flag misuse of the drill API.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DrillError {
    #[error("failed to load word list from {path:?}")]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: StoreError,
    },
    #[error("failed to save word list to {path:?}")]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: StoreError,
    },
    #[error("word list sync failed: {0}")]
    SyncFailed(String),
    #[error("speech fetch or playback failed: {0}")]
    SpeechFailed(String),
    #[error("cannot select a word from an empty list")]
    EmptyList,
    #[error("word '{0}' is not in the list")]
    UnknownWord(String),
    #[error("no word has been presented yet")]
    NothingPresented,
}

/// What went wrong underneath a load or save.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
