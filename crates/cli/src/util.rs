//! Shared utilities for CLI commands

use crate::config::HoloConfig;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use holodex_core::CharacterFields;
use holodex_store::OverrideStore;
use holodex_swapi::SwapiClient;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

/// Location of the override blob: `HOLO_DATA_DIR` if set, otherwise the
/// platform data directory.
pub fn store_path() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("HOLO_DATA_DIR") {
        return Ok(PathBuf::from(dir).join("characters.json"));
    }

    let data_dir = dirs::data_dir().context("Could not determine data directory")?;
    Ok(data_dir.join("holodex").join("characters.json"))
}

pub fn open_store() -> Result<OverrideStore> {
    Ok(OverrideStore::open(store_path()?))
}

pub fn api_client(config: &HoloConfig) -> Result<SwapiClient> {
    SwapiClient::new(
        config.api.base_url.clone(),
        Duration::from_secs(config.api.timeout_secs),
    )
    .context("Failed to build HTTP client")
}

/// Spinner shown while a fetch is in flight.
pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

/// Format an ISO-8601 timestamp as relative time ("2 hours ago").
/// Unparseable input is shown as-is.
pub fn format_relative_time(iso: &str) -> String {
    let saved = match DateTime::parse_from_rfc3339(iso) {
        Ok(ts) => ts.with_timezone(&Utc),
        Err(_) => return iso.to_string(),
    };

    let elapsed = Utc::now().signed_duration_since(saved);
    let seconds = elapsed.num_seconds();

    if seconds < 0 {
        "in the future".to_string()
    } else if seconds < 60 {
        format!("{} seconds ago", seconds)
    } else if seconds < 3600 {
        format!("{} minutes ago", seconds / 60)
    } else if seconds < 86400 {
        format!("{} hours ago", seconds / 3600)
    } else if seconds < 604800 {
        format!("{} days ago", seconds / 86400)
    } else {
        format!("{} weeks ago", seconds / 604800)
    }
}

/// Label/value rows for the eight editable fields, in display order.
pub fn field_rows(fields: &CharacterFields) -> [(&'static str, &str); 8] {
    [
        ("Name", fields.name.as_str()),
        ("Height", fields.height.as_str()),
        ("Mass", fields.mass.as_str()),
        ("Hair color", fields.hair_color.as_str()),
        ("Skin color", fields.skin_color.as_str()),
        ("Eye color", fields.eye_color.as_str()),
        ("Birth year", fields.birth_year.as_str()),
        ("Gender", fields.gender.as_str()),
    ]
}
