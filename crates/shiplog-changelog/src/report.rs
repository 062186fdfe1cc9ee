//! Release report
//!
//! Renders the operator-facing summary of a run: the commits left out of
//! the changelog, and a tracker query covering every ticket key seen in
//! the batch. Diagnostic output only, never persisted.

use std::fmt::Write;

use shiplog_core::config::ReportConfig;

use crate::types::ReleaseBatch;

/// Banner opening the excluded-commits block
pub const EXCLUDED_BANNER: &str = "========== excluded commits ==========";

/// Banner opening the ticket-query block
pub const QUERY_BANNER: &str = "========== ticket query ==========";

/// Banner closing either block
pub const END_BANNER: &str = "======================================";

/// Release report renderer
pub struct ReleaseReport {
    config: ReportConfig,
}

impl ReleaseReport {
    /// Create a report renderer
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Render both report blocks for a batch
    pub fn render(&self, batch: &ReleaseBatch) -> String {
        let mut out = String::new();

        _ = writeln!(out, "{}", EXCLUDED_BANNER);
        for text in &batch.excluded {
            _ = writeln!(out, "{}", text);
        }
        _ = writeln!(out, "{}", END_BANNER);

        if let Some(query) = self.query(&batch.tickets) {
            _ = writeln!(out, "{}", QUERY_BANNER);
            _ = writeln!(out, "{}", query);
            _ = writeln!(out, "{}", END_BANNER);
        }

        out
    }

    /// The tracker query expression, or None when suppressed.
    ///
    /// An empty ticket list yields no block by default; `key in()` matches
    /// nothing in any tracker dialect. `emit_empty_query` restores the
    /// degenerate form for callers that diff report output.
    pub fn query(&self, tickets: &[String]) -> Option<String> {
        if tickets.is_empty() && !self.config.emit_empty_query {
            return None;
        }

        let keys: Vec<String> = tickets.iter().map(|k| dash_whitespace(k)).collect();
        Some(format!("key in({})", keys.join(",")))
    }
}

/// Replace internal whitespace runs with a dash
fn dash_whitespace(key: &str) -> String {
    key.split_whitespace().collect::<Vec<_>>().join("-")
}
