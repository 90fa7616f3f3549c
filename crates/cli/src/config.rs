//! System configuration
//!
//! Loaded from `config.toml` under the platform config directory
//! (`HOLO_CONFIG_DIR` overrides the directory). Missing file means
//! defaults; a present file only needs the keys it wants to change.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HoloConfig {
    pub api: ApiConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the remote character API.
    pub base_url: String,
    /// Overall per-request timeout.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Delay before an interactive query is sent upstream.
    pub debounce_ms: u64,
}

impl Default for HoloConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: holodex_swapi::DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

impl HoloConfig {
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            anyhow::bail!("api.base_url must not be empty");
        }
        if !(1..=120).contains(&self.api.timeout_secs) {
            anyhow::bail!("api.timeout_secs must be between 1 and 120");
        }
        if self.search.debounce_ms > 5000 {
            anyhow::bail!("search.debounce_ms must be at most 5000");
        }
        Ok(())
    }
}

/// Directory holding `config.toml`.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("HOLO_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|d| d.join("holodex"))
}

pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load the config, falling back to defaults when no file exists.
pub fn load() -> Result<HoloConfig> {
    let path = match config_file_path() {
        Some(path) => path,
        None => return Ok(HoloConfig::default()),
    };

    if !path.exists() {
        return Ok(HoloConfig::default());
    }

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: HoloConfig = toml::from_str(&raw)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate().context("Invalid configuration")?;

    Ok(config)
}

/// Persist the config.
pub fn save(config: &HoloConfig) -> Result<()> {
    let path = config_file_path().context("Could not determine config file path")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    let raw = toml::to_string_pretty(config).context("Failed to serialize config")?;
    std::fs::write(&path, raw)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    Ok(())
}

/// Create the config file with defaults if it is not there yet.
pub fn init_if_missing() -> Result<()> {
    let path = config_file_path().context("Could not determine config file path")?;
    if !path.exists() {
        save(&HoloConfig::default())?;
    }
    Ok(())
}

/// Example config file, for `holo config path` guidance.
pub fn example_config() -> String {
    let defaults = HoloConfig::default();
    format!(
        "[api]\nbase_url = \"{}\"\ntimeout_secs = {}\n\n[search]\ndebounce_ms = {}\n",
        defaults.api.base_url, defaults.api.timeout_secs, defaults.search.debounce_ms
    )
}
