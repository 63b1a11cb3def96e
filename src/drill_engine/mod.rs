//! Core drill engine — word records, selection, grading, merge, persistence.
//!
//! ## Module overview
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `models`   | Shared types: word entries, remote records, grading outcome |
//! | `selector` | Weight-biased random word selection |
//! | `grader`   | Guess checking and weight adjustment |
//! | `merge`    | Reconciling the local list with a remote payload |
//! | `store`    | Whole-document JSON persistence with atomic writes |
//! | `error`    | The crate-wide error taxonomy |

pub mod error;
pub mod grader;
pub mod merge;
pub mod models;
pub mod selector;
pub mod store;

// Re-export the public API surface so callers can use
// `drill_engine::select` without reaching into sub-modules.
pub use error::{DrillError, StoreError};
pub use grader::grade;
pub use merge::merge;
pub use models::{Outcome, RemoteWord, WordEntry, DEFAULT_WEIGHT, WEIGHT_MAX};
pub use selector::select;
pub use store::WordStore;
