use rand::Rng;

use crate::drill_engine::error::DrillError;
use crate::drill_engine::models::WordEntry;

/// Pick the word for the next drill round.
///
/// The list is ranked by weight descending (the sort is stable, so equal
/// weights keep their stored order) and a uniformly random index is drawn
/// from the upper half of the ranking — `[0, max(1, n / 2))`. A
/// single-element list always yields its element. Only a ranking of
/// references is sorted; the caller's list is never reordered.
///
/// Restricting the draw to the top half keeps high-weight words dominating
/// the rotation.
///
/// Errors with [`DrillError::EmptyList`] when there is nothing to pick.
pub fn select<R: Rng>(words: &[WordEntry], rng: &mut R) -> Result<String, DrillError> {
    if words.is_empty() {
        return Err(DrillError::EmptyList);
    }

    let mut ranked: Vec<&WordEntry> = words.iter().collect();
    ranked.sort_by(|a, b| b.weight.cmp(&a.weight));

    let upper = (ranked.len() / 2).max(1);
    let index = rng.gen_range(0..upper);
    Ok(ranked[index].word.clone())
}
