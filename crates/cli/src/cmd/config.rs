//! Configuration management command
//!
//! Provides CLI interface to view and edit holodex configuration.

use crate::config;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

/// List all configuration values
pub async fn run_list() -> Result<()> {
    let config = config::load()?;
    let config_path = config::config_file_path()
        .context("Could not determine config file path")?;

    println!("{}", "Holodex Configuration".bold());
    println!("{}: {}\n", "Location".dimmed(), config_path.display().dimmed());

    println!("{}", "[api]".yellow());
    println!("  {} = {}", "base_url".cyan(), config.api.base_url);
    println!(
        "  {} = {} {}",
        "timeout_secs".cyan(),
        config.api.timeout_secs,
        format!("({}s per request)", config.api.timeout_secs).dimmed()
    );

    println!("\n{}", "[search]".yellow());
    println!(
        "  {} = {} {}",
        "debounce_ms".cyan(),
        config.search.debounce_ms,
        format!("({}ms before a query is sent)", config.search.debounce_ms).dimmed()
    );

    println!("\n{}", "Valid Ranges:".bold());
    println!("  timeout_secs: 1-120");
    println!("  debounce_ms: 0-5000");

    Ok(())
}

/// Get a single configuration value
pub async fn run_get(key: &str) -> Result<()> {
    let config = config::load()?;

    let value = match key {
        "api.base_url" => config.api.base_url.clone(),
        "api.timeout_secs" => config.api.timeout_secs.to_string(),
        "search.debounce_ms" => config.search.debounce_ms.to_string(),
        _ => anyhow::bail!(
            "Unknown config key: {}. Use 'holo config list' to see available keys.",
            key
        ),
    };

    println!("{}", value);
    Ok(())
}

/// Set a configuration value
pub async fn run_set(key: &str, value: &str) -> Result<()> {
    let mut config = config::load()?;

    match key {
        "api.base_url" => {
            config.api.base_url = value.to_string();
        }
        "api.timeout_secs" => {
            let val: u64 = value.parse()
                .context("Invalid value: must be a positive integer")?;
            config.api.timeout_secs = val;
        }
        "search.debounce_ms" => {
            let val: u64 = value.parse()
                .context("Invalid value: must be a non-negative integer")?;
            config.search.debounce_ms = val;
        }
        _ => anyhow::bail!(
            "Unknown config key: {}. Use 'holo config list' to see available keys.",
            key
        ),
    }

    // Validate before saving
    config.validate()
        .context("Invalid configuration value")?;

    config::save(&config)?;

    println!("{} {} = {}", "✓".green(), key.cyan(), value);

    Ok(())
}

/// Show the config file path and optionally create it
pub async fn run_path(create: bool) -> Result<()> {
    let config_path = config::config_file_path()
        .context("Could not determine config file path")?;

    if create && !config_path.exists() {
        config::init_if_missing()?;
        println!("{} Created config file at: {}", "✓".green(), config_path.display());
    } else if config_path.exists() {
        println!("{}", config_path.display());
    } else {
        println!("{}", config_path.display());
        println!("{}", "File does not exist. Use --create to create it.".yellow());
        println!("\n{}", "Example:".bold());
        print!("{}", config::example_config());
    }

    Ok(())
}
