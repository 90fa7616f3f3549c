//! Interactive debounced name search
//!
//! Reads query lines from stdin and pushes them through the debounce gate,
//! so rapid retyping only hits the remote API once per pause.

use crate::{config, util};
use anyhow::{Context, Result};
use holodex_core::Debouncer;
use holodex_store::OverrideStore;
use holodex_swapi::SwapiClient;
use owo_colors::OwoColorize;
use std::time::Duration;
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    let config = config::load()?;
    let client = util::api_client(&config)?;
    let store = util::open_store()?;

    let (tx, mut settled) = mpsc::unbounded_channel::<String>();
    let debounced = Debouncer::new(
        Duration::from_millis(config.search.debounce_ms),
        move |query: String| {
            let _ = tx.send(query);
        },
    );

    println!("{}", "Interactive search".bold());
    println!("{}", "Type a name and press enter; an empty line quits.".dimmed());

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line.context("Failed to read stdin")? {
                    Some(line) if !line.trim().is_empty() => {
                        debounced.call(line.trim().to_string());
                    }
                    // Empty line or EOF ends the session.
                    _ => break,
                }
            }
            Some(query) = settled.recv() => {
                run_query(&client, &store, &query).await;
            }
        }
    }

    // A query still inside the debounce window flushes on drop; run it
    // before quitting so the last input is not silently lost.
    drop(debounced);
    while let Some(query) = settled.recv().await {
        run_query(&client, &store, &query).await;
    }

    Ok(())
}

async fn run_query(client: &SwapiClient, store: &OverrideStore, query: &str) {
    let bar = util::spinner("Searching...");
    let result = client.search_characters(query, 1).await;
    bar.finish_and_clear();

    let listing = match result {
        Ok(listing) => listing,
        // A failed fetch ends one query, not the session.
        Err(err) => {
            eprintln!("{} {}", "Search failed:".red(), err);
            return;
        }
    };

    println!("{} {}", "Results for".bold(), query.cyan());
    if listing.results.is_empty() {
        println!("  {}", "No characters found".dimmed());
        return;
    }

    for character in &listing.results {
        let marker = if store.is_overridden(&character.uid) {
            format!(" {}", "[modified]".yellow())
        } else {
            String::new()
        };
        println!("  {:>4}  {}{}", character.uid.cyan(), character.name, marker);
    }
}
