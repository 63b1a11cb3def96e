use crate::drill_engine::error::DrillError;
use crate::drill_engine::models::{Outcome, WordEntry, WEIGHT_MAX};

/// Grade a typed guess against the word that was presented.
///
/// Comparison is exact and case-sensitive. A correct guess bumps the word's
/// weight by one, capped at [`WEIGHT_MAX`]; a miss drops it by one, floored
/// at zero. The adjustment lands on the first entry whose `word` equals
/// `presented`.
///
/// Errors with [`DrillError::UnknownWord`] when `presented` is not in the
/// list.
pub fn grade(
    user_input: &str,
    presented: &str,
    words: &mut [WordEntry],
) -> Result<Outcome, DrillError> {
    let entry = words
        .iter_mut()
        .find(|e| e.word == presented)
        .ok_or_else(|| DrillError::UnknownWord(presented.to_string()))?;

    if user_input == presented {
        entry.weight = entry.weight.saturating_add(1).min(WEIGHT_MAX);
        Ok(Outcome::Correct)
    } else {
        entry.weight = entry.weight.saturating_sub(1);
        Ok(Outcome::Incorrect)
    }
}
