use crate::drill_engine::models::{RemoteWord, WordEntry, DEFAULT_WEIGHT};

/// Fold a remote word-list payload into the local list, in place.
///
/// For each remote record, in payload order:
///
/// - a local entry with the same word gets its metadata replaced by the
///   record's fields — except `weight`, which keeps the locally learned
///   value;
/// - a word with no local entry is appended with [`DEFAULT_WEIGHT`].
///
/// Local entries absent from the payload are retained unchanged, so a sync
/// never shrinks the list. The result keeps the original local order,
/// followed by the newly appended remote-only words. Applying the same
/// payload twice is a no-op the second time.
pub fn merge(local: &mut Vec<WordEntry>, remote: Vec<RemoteWord>) {
    for item in remote {
        let RemoteWord { word, mut extra } = item;
        // Local weights are authoritative; a remote "weight" key is dropped.
        extra.remove("weight");

        match local.iter_mut().find(|e| e.word == word) {
            Some(entry) => entry.extra = extra,
            None => local.push(WordEntry {
                word,
                weight: DEFAULT_WEIGHT,
                extra,
            }),
        }
    }
}
