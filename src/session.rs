//! A drill session: exclusive owner of the in-memory word list.
//!
//! The session holds the word list, the currently presented word, and the
//! RNG, and exposes exactly the operations the drill needs — load, sync,
//! pick, check, save. Every mutation goes through `&mut self`, so two
//! writers cannot overlap and a failed sync or save can never corrupt the
//! list mid-operation.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::drill_engine::{
    grade, merge, select, DrillError, Outcome, RemoteWord, WordEntry, WordStore,
};

pub struct DrillSession {
    store: WordStore,
    words: Vec<WordEntry>,
    presented: Option<String>,
    rng: StdRng,
}

impl DrillSession {
    /// Load the word list from `store` and start a session over it.
    ///
    /// Pass a seed for a reproducible selection sequence, or `None` for
    /// entropy.
    pub fn open(store: WordStore, seed: Option<u64>) -> Result<Self, DrillError> {
        let words = store.load()?;
        Ok(Self::with_words(store, words, seed))
    }

    /// Session over an explicit in-memory list; the backing document is
    /// not read. Useful after a failed load, or in tests.
    pub fn with_words(store: WordStore, words: Vec<WordEntry>, seed: Option<u64>) -> Self {
        DrillSession {
            store,
            words,
            presented: None,
            rng: match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None       => StdRng::from_entropy(),
            },
        }
    }

    /// Words currently in the session, in canonical order.
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    /// The word most recently presented by [`pick_word`], if any.
    ///
    /// [`pick_word`]: DrillSession::pick_word
    pub fn presented(&self) -> Option<&str> {
        self.presented.as_deref()
    }

    /// Where the session persists its list.
    pub fn store(&self) -> &WordStore {
        &self.store
    }

    /// Fold a fetched remote payload into the list. Known words keep their
    /// learned weights; new words join at the default weight.
    pub fn apply_sync(&mut self, remote: Vec<RemoteWord>) {
        let before = self.words.len();
        merge(&mut self.words, remote);
        tracing::info!(
            "sync merged: {} words ({} new)",
            self.words.len(),
            self.words.len() - before
        );
    }

    /// Draw the next word to drill and remember it as the presented word.
    pub fn pick_word(&mut self) -> Result<String, DrillError> {
        let word = select(&self.words, &mut self.rng)?;
        self.presented = Some(word.clone());
        Ok(word)
    }

    /// Drop the presented word without grading it (e.g. when playback
    /// failed and the user never heard it).
    pub fn clear_presented(&mut self) {
        self.presented = None;
    }

    /// Grade `input` against the presented word and adjust its weight.
    ///
    /// The word stays presented until the next [`pick_word`], so a guess
    /// can be retried — each attempt is graded and adjusts the weight.
    ///
    /// [`pick_word`]: DrillSession::pick_word
    pub fn check(&mut self, input: &str) -> Result<Outcome, DrillError> {
        let presented = self
            .presented
            .clone()
            .ok_or(DrillError::NothingPresented)?;
        grade(input, &presented, &mut self.words)
    }

    /// Persist the list to the backing store (atomic whole-document write).
    pub fn save(&self) -> Result<(), DrillError> {
        self.store.save(&self.words)
    }
}
