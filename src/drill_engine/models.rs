use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Weight scale
// ---------------------------------------------------------------------------

/// Largest weight a word can reach.
pub const WEIGHT_MAX: u8 = 5;

/// Weight assigned to a word the first time it appears locally.
pub const DEFAULT_WEIGHT: u8 = 3;

fn default_weight() -> u8 {
    DEFAULT_WEIGHT
}

// ---------------------------------------------------------------------------
// Word records
// ---------------------------------------------------------------------------

/// A spelling target with its learned selection weight.
///
/// `extra` holds whatever additional fields the remote word list supplied
/// (definition, phonetic, example sentence, …). Those fields round-trip
/// through merge, save, and load untouched; only `word` and `weight` are
/// meaningful to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    /// Confidence score in `[0, WEIGHT_MAX]`; higher = more likely drawn.
    #[serde(default = "default_weight")]
    pub weight: u8,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WordEntry {
    /// Entry with no passthrough metadata.
    pub fn new(word: impl Into<String>, weight: u8) -> Self {
        WordEntry {
            word: word.into(),
            weight,
            extra: Map::new(),
        }
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (weight {})", self.word, self.weight)
    }
}

/// One record of the remote word list: a word plus arbitrary metadata.
///
/// Weights are local state and never taken from the remote side; the
/// `merge` operation drops any `weight` key a payload carries.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteWord {
    pub word: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// Grading outcome
// ---------------------------------------------------------------------------

/// Result of checking a typed guess against the presented word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Correct   => write!(f, "Correct!"),
            Outcome::Incorrect => write!(f, "Incorrect!"),
        }
    }
}
