//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for shiplog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project name
    pub name: Option<String>,

    /// Git configuration
    pub git: GitConfig,

    /// Changelog configuration
    pub changelog: ChangelogConfig,

    /// Ticket-key recognition configuration
    pub ticket: TicketConfig,

    /// Category keyword configuration
    pub keywords: KeywordsConfig,

    /// Diagnostic report configuration
    pub report: ReportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: None,
            git: GitConfig::default(),
            changelog: ChangelogConfig::default(),
            ticket: TicketConfig::default(),
            keywords: KeywordsConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// Git configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Tag marking the previous release; commit collection starts after it.
    /// When unset (and no --since on the command line) the full history
    /// of the current branch is used.
    pub since_tag: Option<String>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self { since_tag: None }
    }
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog document path, relative to the repository root
    pub file: PathBuf,

    /// Line offset at which the new release section is inserted.
    /// Lines before this offset (typically the document title and intro)
    /// are never touched.
    pub insert_offset: usize,

    /// chrono format string for the section header date
    pub date_format: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("CHANGELOG.md"),
            insert_offset: 4,
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

/// Ticket-key recognition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketConfig {
    /// Project code of the issue tracker (the `M3` in `M3-1001`)
    pub project_code: String,
}

impl Default for TicketConfig {
    fn default() -> Self {
        Self {
            project_code: "M3".to_string(),
        }
    }
}

/// Category keyword configuration.
///
/// Each set is ordered and matched as a case-insensitive substring against
/// the normalized commit subject. The sets are checked in the fixed order
/// excluded, breaking, changed, fixed; the first containing keyword wins
/// and anything unmatched lands in Added. Overlap between sets is resolved
/// by that order, never reported as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordsConfig {
    /// Markers for commits left out of the changelog (test/tooling work)
    pub excluded: Vec<String>,

    /// Markers for breaking changes
    pub breaking: Vec<String>,

    /// Markers for behavior changes
    pub changed: Vec<String>,

    /// Markers for defect and maintenance work
    pub fixed: Vec<String>,
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        Self {
            excluded: str_vec(&["test", "script", "storybook", "e2e"]),
            breaking: str_vec(&["break", "deprecate"]),
            changed: str_vec(&["update", "change", "perf"]),
            fixed: str_vec(&["fix", "repair", "bug", "docs", "refactor", "build"]),
        }
    }
}

/// Diagnostic report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Render the ticket query block as `key in()` when no ticket keys
    /// were collected. Off by default: an empty query matches nothing, so
    /// the block is suppressed entirely.
    pub emit_empty_query: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            emit_empty_query: false,
        }
    }
}

fn str_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
