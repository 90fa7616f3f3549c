//! Test profile fixtures
//!
//! A [`TestProfile`] is an isolated data/config directory pair plus helpers
//! to seed and inspect the override blob directly on disk.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestProfile {
    dir: TempDir,
}

impl TestProfile {
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("Failed to create test profile dir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }

    /// Location of the override blob inside this profile.
    pub fn blob_path(&self) -> PathBuf {
        self.dir.path().join("data").join("characters.json")
    }

    /// Write a full override table directly, bypassing the CLI.
    pub fn seed_overrides(&self, table: &Value) -> Result<()> {
        let path = self.blob_path();
        std::fs::create_dir_all(path.parent().unwrap())
            .context("Failed to create data directory")?;
        std::fs::write(&path, serde_json::to_vec_pretty(table)?)
            .context("Failed to seed override blob")?;
        Ok(())
    }

    /// Read the override table back from disk.
    pub fn read_overrides(&self) -> Result<Value> {
        let raw = std::fs::read_to_string(self.blob_path())
            .context("Override blob missing")?;
        serde_json::from_str(&raw).context("Override blob is not valid JSON")
    }

    /// A complete stored record for tests, `lastModified` fixed.
    pub fn luke_record() -> Value {
        serde_json::json!({
            "uid": "1",
            "name": "Luke Skywalker",
            "height": "172",
            "mass": "77",
            "hair_color": "blond",
            "skin_color": "fair",
            "eye_color": "blue",
            "birth_year": "19BBY",
            "gender": "male",
            "lastModified": "2023-01-01T00:00:00.000Z",
        })
    }
}
