use std::collections::HashSet;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::drill_engine::error::{DrillError, StoreError};
use crate::drill_engine::models::{WordEntry, WEIGHT_MAX};

/// The persistence boundary: one JSON array of word entries at a fixed
/// path, replaced wholesale on every save.
#[derive(Debug, Clone)]
pub struct WordStore {
    path: PathBuf,
}

impl WordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        WordStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full word list.
    ///
    /// A missing document is a fresh start and loads as an empty list; an
    /// unreadable or malformed document is a [`DrillError::LoadFailed`].
    /// Duplicated words keep their first occurrence, and out-of-range
    /// weights are clamped back into `[0, WEIGHT_MAX]`.
    pub fn load(&self) -> Result<Vec<WordEntry>, DrillError> {
        if !self.path.exists() {
            tracing::info!("no word list at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let mut words = self.read().map_err(|source| DrillError::LoadFailed {
            path: self.path.clone(),
            source,
        })?;
        normalize(&mut words);
        tracing::info!("loaded {} words from {}", words.len(), self.path.display());
        Ok(words)
    }

    /// Replace the persisted document with `words`.
    ///
    /// The document is written to a temporary file in the same directory
    /// and atomically renamed over the old one, so an interrupted save
    /// never leaves a corrupt file behind.
    pub fn save(&self, words: &[WordEntry]) -> Result<(), DrillError> {
        self.write(words).map_err(|source| DrillError::SaveFailed {
            path: self.path.clone(),
            source,
        })
    }

    fn read(&self) -> Result<Vec<WordEntry>, StoreError> {
        let file = fs::File::open(&self.path)?;
        let words = serde_json::from_reader(BufReader::new(file))?;
        Ok(words)
    }

    fn write(&self, words: &[WordEntry]) -> Result<(), StoreError> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let temp = NamedTempFile::new_in(parent)?;
        let mut writer = BufWriter::new(&temp);
        serde_json::to_writer_pretty(&mut writer, words)?;
        writer.flush()?;
        drop(writer);

        temp.persist(&self.path).map_err(|e| e.error)?;
        tracing::info!("saved {} words to {}", words.len(), self.path.display());
        Ok(())
    }
}

/// The first occurrence of a duplicated word wins; weights outside the
/// scale are clamped back into range.
fn normalize(words: &mut Vec<WordEntry>) {
    let mut seen = HashSet::new();
    words.retain(|e| seen.insert(e.word.clone()));
    for entry in words {
        entry.weight = entry.weight.min(WEIGHT_MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store_in(dir: &tempfile::TempDir) -> WordStore {
        WordStore::new(dir.path().join("words.json"))
    }

    #[test]
    fn round_trips_entries_with_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut entry = WordEntry::new("necessary", 4);
        entry
            .extra
            .insert("definition".into(), json!("required; essential"));
        let words = vec![entry, WordEntry::new("rhythm", 1)];

        store.save(&words).unwrap();
        assert_eq!(store.load().unwrap(), words);
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store_in(&dir).load().unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_is_load_failed() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not json at all").unwrap();

        match store.load() {
            Err(DrillError::LoadFailed { .. }) => {}
            other => panic!("expected LoadFailed, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_words_keep_first_occurrence() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"[{"word":"cat","weight":4},{"word":"cat","weight":1}]"#,
        )
        .unwrap();

        let words = store.load().unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].weight, 4);
    }

    #[test]
    fn out_of_range_weights_are_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"[{"word":"cat","weight":9}]"#).unwrap();

        assert_eq!(store.load().unwrap()[0].weight, WEIGHT_MAX);
    }
}
