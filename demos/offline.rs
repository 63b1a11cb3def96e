//! Offline tour of the drill engine.
//!
//! Run with: `cargo run --example offline`
//!
//! No network and no audio: this walks the core operations over an
//! in-memory list with a seeded RNG, so the output is deterministic and
//! reproducible.
//!
//! 1. **Merge** — a local list with learned weights absorbs a remote
//!    payload: matched words keep their weights and take the new metadata,
//!    unknown words join at the default weight 3.
//! 2. **Drill rounds** — words are drawn from the upper half of the
//!    weight-sorted list; correct answers push a weight toward 5, misses
//!    push it toward 0.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

use spelling_drill::{grade, merge, select, RemoteWord, WordEntry};

fn print_list(words: &[WordEntry]) {
    for entry in words {
        let extras: Vec<String> = entry
            .extra
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect();
        if extras.is_empty() {
            println!("  {entry}");
        } else {
            println!("  {entry}  [{}]", extras.join(", "));
        }
    }
}

fn main() {
    // ── Merge ───────────────────────────────────────────────────────────────
    // "rhythm" exists locally with a learned weight of 5; the payload
    // refreshes its metadata but may not touch the weight. "liaison" is new
    // and joins at weight 3.
    let mut words = vec![
        WordEntry::new("rhythm", 5),
        WordEntry::new("acquire", 1),
    ];

    let payload: Vec<RemoteWord> = serde_json::from_value(json!([
        {"word": "rhythm",  "phonetic": "/ˈrɪðəm/"},
        {"word": "liaison", "phonetic": "/liˈeɪzɒn/"},
    ]))
    .expect("payload literal must parse");

    println!("══ Before sync ══");
    print_list(&words);

    merge(&mut words, payload);

    println!();
    println!("══ After sync (weights preserved, metadata refreshed) ══");
    print_list(&words);

    // ── Drill rounds ────────────────────────────────────────────────────────
    // Fixed seed → the same words are drawn every run. Each round grades a
    // scripted guess: first an intentional miss, then the right answer.
    let mut rng = StdRng::seed_from_u64(42);

    println!();
    println!("══ Six drill rounds (seed 42) ══");
    for round in 1..=6 {
        let word = select(&words, &mut rng).expect("list is non-empty");

        // Miss on odd rounds, hit on even ones.
        let guess = if round % 2 == 1 { "???" } else { word.as_str() };
        let guess = guess.to_string();
        let outcome = grade(&guess, &word, &mut words).expect("word was just selected");

        println!("  round {round}: '{word}' guessed '{guess}' → {outcome}");
    }

    println!();
    println!("══ Weights after the rounds ══");
    print_list(&words);
}
