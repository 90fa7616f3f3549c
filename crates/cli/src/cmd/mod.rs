//! CLI command implementations

pub mod clear;
pub mod config;
pub mod edit;
pub mod list;
pub mod overrides;
pub mod revert;
pub mod search;
pub mod show;
