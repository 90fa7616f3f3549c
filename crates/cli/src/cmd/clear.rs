//! Discard all local edits

use crate::util;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::Write;

pub async fn run(yes: bool) -> Result<()> {
    let store = util::open_store()?;

    let count = store.count();
    if count == 0 {
        println!("No local edits to clear");
        return Ok(());
    }

    if !yes {
        print!(
            "This will discard local edits for {} character(s). Continue? [y/N] ",
            count
        );
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let mut answer = String::new();
        std::io::stdin()
            .read_line(&mut answer)
            .context("Failed to read confirmation")?;

        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            println!("Aborted");
            return Ok(());
        }
    }

    store.clear_all()?;
    println!("{} Cleared local edits for {} character(s)", "✓".green(), count);

    Ok(())
}
