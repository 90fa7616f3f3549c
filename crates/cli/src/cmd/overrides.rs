//! List all locally edited characters

use crate::util;
use anyhow::Result;
use owo_colors::OwoColorize;

pub async fn run() -> Result<()> {
    let store = util::open_store()?;
    let table = store.load_all();

    println!("{}", "Local edits".bold());
    println!();

    if table.is_empty() {
        println!("  {}", "No local edits".dimmed());
        println!();
        println!("{}", "Tip: edit a character with 'holo edit <uid> --name ...'".dimmed());
        return Ok(());
    }

    for (uid, stored) in &table {
        println!(
            "  {:>4}  {:<24} {}",
            uid.cyan(),
            stored.fields.name,
            format!("saved {}", util::format_relative_time(&stored.last_modified)).dimmed()
        );
    }

    println!();
    println!("{} character(s) edited locally", table.len());

    Ok(())
}
