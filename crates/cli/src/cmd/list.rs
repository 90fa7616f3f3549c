//! List characters, one page at a time

use crate::{config, util};
use anyhow::{Context, Result};
use holodex_swapi::SearchParams;
use owo_colors::OwoColorize;

pub async fn run(page: u32, search: Option<String>) -> Result<()> {
    let config = config::load()?;
    let client = util::api_client(&config)?;
    let store = util::open_store()?;

    let bar = util::spinner("Fetching characters...");
    let result = client
        .get_characters(&SearchParams {
            page: Some(page),
            search: search.clone(),
        })
        .await;
    bar.finish_and_clear();

    let listing = result.context("Failed to fetch character listing")?;

    match &search {
        Some(query) => println!("{} {}", "Characters matching".bold(), query.cyan()),
        None => println!("{}", "Characters".bold()),
    }
    println!();

    if listing.results.is_empty() {
        println!("  {}", "No characters found".dimmed());
        return Ok(());
    }

    for character in &listing.results {
        let marker = if store.is_overridden(&character.uid) {
            format!(" {}", "[modified]".yellow())
        } else {
            String::new()
        };
        println!("  {:>4}  {}{}", character.uid.cyan(), character.name, marker);
    }

    println!();
    println!(
        "Page {} of {} ({} records)",
        page,
        listing.total_pages,
        listing.total_records
    );

    if listing.next.is_some() {
        println!(
            "{}",
            format!("Tip: see the next page with 'holo list --page {}'", page + 1).dimmed()
        );
    }

    Ok(())
}
