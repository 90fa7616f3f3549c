//! Discard local edits for one character

use crate::util;
use anyhow::Result;
use owo_colors::OwoColorize;

pub async fn run(uid: &str) -> Result<()> {
    let store = util::open_store()?;

    let existing = store.load_one(uid);
    store.delete(uid)?;

    match existing {
        Some(stored) => println!(
            "{} Removed local edits for {} {}",
            "✓".green(),
            stored.fields.name.bold(),
            format!("(uid {uid})").dimmed()
        ),
        None => println!("No local edits for uid {uid}"),
    }

    Ok(())
}
