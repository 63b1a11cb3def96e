//! # spelling_drill
//!
//! A weighted spelling-drill engine with local persistence and remote sync.
//!
//! The engine drills spelling the way a flashcard box drills vocabulary: a
//! word is spoken aloud (audio fetched from a remote text-to-speech
//! endpoint), the user types what they heard, and the word's integer
//! *weight* in `[0, 5]` is nudged up on a correct answer and down on a
//! miss. Weights bias which word gets drawn next, and they survive both
//! restarts and word-list updates: the local JSON document is merged
//! against the remotely published list without ever discarding a learned
//! weight.
//!
//! ## How it works
//!
//! 1. Open a [`DrillSession`] — it loads the word list from a [`WordStore`]
//!    (empty on a first run).
//! 2. Sync when online: fetch the published list with [`WordListClient`]
//!    and apply it with [`DrillSession::apply_sync`] — known words keep
//!    their weights, new words join at the default weight 3.
//! 3. Drill: [`DrillSession::pick_word`] draws from the upper half of the
//!    weight-sorted list, [`SpeechClient`] speaks the word, and
//!    [`DrillSession::check`] grades the typed guess and adjusts the
//!    weight.
//! 4. [`DrillSession::save`] persists the list at teardown (atomic
//!    whole-document write).
//!
//! ## Key properties
//!
//! - **Deterministic drills**: pass `seed: Some(u64)` when opening a
//!   session to reproduce the exact selection sequence — useful for tests.
//! - **Weights never lost**: a sync overwrites a word's metadata from the
//!   remote record but always keeps the locally learned weight, and never
//!   deletes a word.
//! - **Explicit failures**: every I/O and network error is a typed
//!   [`DrillError`]; no operation returns a placeholder success value.
//!
//! ## Quick start
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use spelling_drill::{grade, select, Outcome, WordEntry};
//!
//! let mut words = vec![
//!     WordEntry::new("rhythm", 5),
//!     WordEntry::new("acquire", 2),
//! ];
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let word = select(&words, &mut rng).unwrap();
//!
//! let outcome = grade("rhythm", &word, &mut words).unwrap();
//! assert_eq!(outcome, Outcome::Correct);
//! ```

pub mod config;
pub mod drill_engine;
pub mod remote;
pub mod session;

// Convenience re-exports so callers can use `spelling_drill::select`
// directly without reaching into `drill_engine::`.
pub use config::AppConfig;
pub use drill_engine::{
    grade, merge, select, DrillError, Outcome, RemoteWord, StoreError, WordEntry, WordStore,
    DEFAULT_WEIGHT, WEIGHT_MAX,
};
pub use remote::{SpeechClient, WordListClient};
pub use session::DrillSession;
