//! Write-side errors for the override store
//!
//! Read failures never surface here: a missing or corrupt blob degrades to
//! an empty table. Write failures always surface, with a fixed message per
//! operation, because a lost edit must not be reported as success.

use thiserror::Error;

/// A failed mutation of the persisted override blob.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to save character data")]
    Save(#[source] std::io::Error),

    #[error("Failed to delete character data")]
    Delete(#[source] std::io::Error),

    #[error("Failed to clear character data")]
    Clear(#[source] std::io::Error),
}
