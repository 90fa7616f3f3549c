//! Domain types shared across Holodex
//!
//! This crate provides:
//! - Character field records (the editable subset and the stored override)
//! - The debounce gate used by interactive search

pub mod character;
pub mod debounce;

// Re-exports
pub use character::{CharacterFields, StoredCharacter};
pub use debounce::Debouncer;
