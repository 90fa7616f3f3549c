//! Local override persistence
//!
//! This crate provides:
//! - The override store: one JSON blob mapping character uid to the
//!   last-saved editable fields plus a save timestamp
//! - Fixed, operation-specific write errors

pub mod error;
pub mod store;

// Re-exports
pub use error::StoreError;
pub use store::{OverrideStore, OverrideTable};
