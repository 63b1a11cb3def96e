//! Interactive spelling drill.
//!
//! `speak` plays a word from the weighted rotation; typing your guess
//! grades it and adjusts the word's weight. The word list lives in a local
//! JSON document and is merged with the published remote list whenever the
//! endpoint is reachable.

use std::io::{stdin, stdout, Write};

use anyhow::{Context, Result};

use spelling_drill::{AppConfig, DrillSession, SpeechClient, WordListClient, WordStore};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config_path = AppConfig::config_path()?;
    let had_config = config_path.exists();
    let config = AppConfig::load()?;
    if !had_config {
        config.save().context("writing default config")?;
        println!("Wrote default config to {}", config_path.display());
    }

    let words_path = config.words_path()?;
    let store = WordStore::new(words_path.clone());
    let mut session = match DrillSession::open(store.clone(), None) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("{e}");
            println!("Could not read the saved word list ({e}); starting empty.");
            DrillSession::with_words(store, Vec::new(), None)
        }
    };

    let word_list = WordListClient::new(&config.word_list_url);
    let speech = SpeechClient::new(&config.speech_url, &config.speech_lang);

    if word_list.is_reachable().await {
        sync(&mut session, &word_list).await;
    } else {
        println!(
            "Offline — drilling the {} locally stored words.",
            session.words().len()
        );
    }

    println!();
    println!("Spelling drill. Commands: speak, sync, list, exit.");
    println!("Anything else is graded as your spelling of the last spoken word.");

    loop {
        print!("> ");
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }

        match input.trim() {
            "exit" | "quit" => break,
            "" => {}
            "speak" => {
                let word = match session.pick_word() {
                    Ok(word) => word,
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                };
                match speech.speak(&word).await {
                    Ok(()) => println!("Type what you heard and press Enter."),
                    Err(e) => {
                        // The word was never heard, so the round is void.
                        session.clear_presented();
                        println!("{e}");
                    }
                }
            }
            "sync" => sync(&mut session, &word_list).await,
            "list" => {
                for entry in session.words() {
                    println!("  {entry}");
                }
            }
            guess => match session.check(guess) {
                Ok(outcome) => println!("{outcome}"),
                Err(e) => println!("{e}"),
            },
        }
    }

    println!("\nSaving word list...");
    match session.save() {
        Ok(()) => println!("Saved to {}", words_path.display()),
        Err(e) => eprintln!("[ERROR] {e}"),
    }

    Ok(())
}

/// Fetch the published list and merge it in; failures keep the local list.
async fn sync(session: &mut DrillSession, client: &WordListClient) {
    match client.fetch().await {
        Ok(remote) => {
            session.apply_sync(remote);
            println!("Synced — {} words in the drill.", session.words().len());
        }
        Err(e) => println!("{e} (keeping the local list)"),
    }
}
