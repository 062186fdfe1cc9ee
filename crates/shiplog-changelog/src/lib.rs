//! Shiplog Changelog - commit classification and changelog splicing
//!
//! This crate turns a release's worth of raw commit subjects into an
//! updated changelog document plus a diagnostic report. The pipeline is
//! normalize (strip PR references and ticket prefixes), classify (ordered
//! keyword rules), splice (positional insertion into the existing
//! document), report (excluded commits and a tracker query).

pub mod classify;
pub mod generator;
pub mod normalize;
pub mod report;
pub mod splice;
pub mod types;

pub use classify::{Category, Classifier};
pub use generator::{ChangelogGenerator, GeneratedRelease};
pub use normalize::{NormalizedSubject, Normalizer};
pub use report::ReleaseReport;
pub use splice::{splice_release, InsertionCursor};
pub use types::{CommitRecord, ReleaseBatch};
