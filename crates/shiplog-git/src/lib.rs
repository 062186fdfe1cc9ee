//! Shiplog Git - commit history access for the changelog generator
//!
//! This crate provides the "version-control log provider" side of the
//! pipeline: it turns a release range into an ordered list of one-line
//! commit subjects, oldest last, with merge commits skipped.

mod commits;
mod repository;
pub mod types;

pub use repository::{GitRepo, Result};
pub use types::CommitInfo;
