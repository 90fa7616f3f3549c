//! File-backed override table
//!
//! The entire persisted state is one JSON object in one well-known file,
//! mapping character uid to a [`StoredCharacter`]. Every mutation reads the
//! whole table, modifies it in memory, and rewrites the whole file; there is
//! no partial-record update primitive. A single active writer is assumed
//! (mutations are not locked against other processes; last writer wins).

use crate::error::StoreError;
use chrono::{DateTime, SecondsFormat, Utc};
use holodex_core::{CharacterFields, StoredCharacter};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// The full persisted mapping, uid -> last-saved override.
pub type OverrideTable = BTreeMap<String, StoredCharacter>;

/// Handle to the persisted override blob.
///
/// Opening never touches the filesystem; the file is created lazily on the
/// first save. Read operations degrade silently: a missing or unparseable
/// blob reads as an empty table. Write operations surface [`StoreError`].
#[derive(Debug, Clone)]
pub struct OverrideStore {
    path: PathBuf,
}

impl OverrideStore {
    /// Create a handle for the blob at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the persisted blob.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and deserialize the whole table.
    ///
    /// A missing file means "nothing saved yet"; a corrupt file is logged
    /// and treated the same. Neither is an error for the caller.
    pub fn load_all(&self) -> OverrideTable {
        let raw = match std::fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                if err.kind() != io::ErrorKind::NotFound {
                    tracing::warn!(path = %self.path.display(), %err, "override blob unreadable, treating as empty");
                }
                return OverrideTable::new();
            }
        };

        match serde_json::from_slice(&raw) {
            Ok(table) => table,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "override blob corrupt, treating as empty");
                OverrideTable::new()
            }
        }
    }

    /// Look up the override for one character, if any.
    ///
    /// Absent is the expected result for most uids.
    pub fn load_one(&self, uid: &str) -> Option<StoredCharacter> {
        self.load_all().remove(uid)
    }

    /// Save (create or replace) the override for `uid`, stamped with the
    /// current time.
    pub fn save(&self, uid: &str, fields: CharacterFields) -> Result<StoredCharacter, StoreError> {
        self.save_at(uid, fields, Utc::now())
    }

    /// Save with an explicit timestamp. Used directly by tests; `save` is
    /// the production entry point.
    pub fn save_at(
        &self,
        uid: &str,
        fields: CharacterFields,
        saved_at: DateTime<Utc>,
    ) -> Result<StoredCharacter, StoreError> {
        let record = StoredCharacter::new(
            uid,
            fields,
            saved_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        );

        let mut table = self.load_all();
        table.insert(uid.to_string(), record.clone());
        self.write_table(&table).map_err(StoreError::Save)?;

        Ok(record)
    }

    /// Remove the override for `uid`. Removing a uid that was never saved
    /// is a no-op (the table is still rewritten).
    pub fn delete(&self, uid: &str) -> Result<(), StoreError> {
        let mut table = self.load_all();
        table.remove(uid);
        self.write_table(&table).map_err(StoreError::Delete)
    }

    /// Whether a local override exists for `uid`.
    pub fn is_overridden(&self, uid: &str) -> bool {
        self.load_one(uid).is_some()
    }

    /// Destroy the whole table by removing the blob file.
    pub fn clear_all(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Clear(err)),
        }
    }

    /// Number of saved overrides.
    pub fn count(&self) -> usize {
        self.load_all().len()
    }

    /// Serialize and atomically replace the blob: write a sibling temp file,
    /// then rename over the target. A failed write never leaves a partial
    /// blob visible at the well-known path.
    fn write_table(&self, table: &OverrideTable) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let data = serde_json::to_vec_pretty(table)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, &data)?;
        std::fs::rename(&tmp, &self.path)
    }
}
