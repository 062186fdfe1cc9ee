//! Shiplog Core - shared foundation for the shiplog release tools
//!
//! This crate provides the error types and the configuration system used
//! by the changelog generator and the CLI.

pub mod config;
pub mod error;

pub use error::{ChangelogError, ConfigError, GitError, Result, ShiplogError};
