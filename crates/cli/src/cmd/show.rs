//! Show one character with local edits applied

use crate::{config, util};
use anyhow::{Context, Result};
use holodex_core::CharacterFields;
use owo_colors::OwoColorize;

pub async fn run(uid: &str) -> Result<()> {
    let config = config::load()?;
    let client = util::api_client(&config)?;
    let store = util::open_store()?;

    let bar = util::spinner("Fetching character...");
    let result = client.get_character_details(uid).await;
    bar.finish_and_clear();

    let detail = result.with_context(|| format!("Failed to fetch character {uid}"))?;
    let remote = detail.result.properties;
    let stored = store.load_one(uid);

    // The local override, when present, wins over the remote record.
    let fields = match &stored {
        Some(stored) => stored.fields.clone(),
        None => CharacterFields::from(&remote),
    };

    println!("{}  {}", fields.name.bold(), format!("(uid {uid})").dimmed());
    if let Some(stored) = &stored {
        println!(
            "{}",
            format!(
                "Locally modified, saved {}",
                util::format_relative_time(&stored.last_modified)
            )
            .yellow()
        );
    }
    println!();

    for (label, value) in util::field_rows(&fields) {
        let value = if value.is_empty() { "N/A" } else { value };
        println!("  {:<12} {}", format!("{label}:").cyan(), value);
    }

    println!();
    println!("{}", "Additional information".bold());
    println!("  {:<12} {}", "Films:".cyan(), remote.films.len());
    println!("  {:<12} {}", "Species:".cyan(), remote.species.len());
    println!("  {:<12} {}", "Vehicles:".cyan(), remote.vehicles.len());
    println!("  {:<12} {}", "Starships:".cyan(), remote.starships.len());
    if !detail.result.description.is_empty() {
        println!("  {:<12} {}", "About:".cyan(), detail.result.description);
    }

    if stored.is_some() {
        println!();
        println!(
            "{}",
            format!("Tip: discard local edits with 'holo revert {uid}'").dimmed()
        );
    }

    Ok(())
}
