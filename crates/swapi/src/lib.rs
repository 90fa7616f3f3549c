//! Client for the Star Wars API (swapi.tech)
//!
//! This crate provides:
//! - Wire types for the listing, search and detail endpoints
//! - An async [`reqwest`]-based client with uniform error normalization
//!
//! The remote source is read-only; nothing here mutates it.

pub mod client;
pub mod error;
pub mod types;

// Re-exports
pub use client::SwapiClient;
pub use error::ApiError;
pub use types::{Character, CharacterDetails, CharacterResponse, ListResponse, SearchParams};

/// Default base URL of the public API.
pub const DEFAULT_BASE_URL: &str = "https://www.swapi.tech/api";

/// Page size the listing endpoint is always queried with.
pub const PAGE_LIMIT: u32 = 10;
