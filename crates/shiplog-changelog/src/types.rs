//! Changelog types

use serde::{Deserialize, Serialize};

use crate::classify::Category;

/// One commit of the release batch, immutable after normalization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    /// The subject as received from the log provider
    pub raw_subject: String,
    /// The subject after normalization
    pub subject: String,
    /// Ticket key stripped from the subject, if any
    pub ticket: Option<String>,
}

impl CommitRecord {
    /// Create a new record
    pub fn new(
        raw_subject: impl Into<String>,
        subject: impl Into<String>,
        ticket: Option<String>,
    ) -> Self {
        Self {
            raw_subject: raw_subject.into(),
            subject: subject.into(),
            ticket,
        }
    }
}

/// One release's worth of classified commits.
///
/// Buckets keep commits in the order they arrived; ticket keys are kept
/// in order of first appearance with duplicates preserved (the report is
/// responsible for any downstream formatting).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReleaseBatch {
    /// Breaking changes
    pub breaking: Vec<String>,
    /// New functionality
    pub added: Vec<String>,
    /// Behavior changes
    pub changed: Vec<String>,
    /// Defect and maintenance work
    pub fixed: Vec<String>,
    /// Commits left out of the changelog, reported separately
    pub excluded: Vec<String>,
    /// Ticket keys collected across the batch
    pub tickets: Vec<String>,
}

impl ReleaseBatch {
    /// Create an empty batch
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a classified commit to its bucket, collecting its ticket key
    pub fn push(&mut self, category: Category, record: CommitRecord) {
        if let Some(ticket) = &record.ticket {
            if !ticket.is_empty() {
                self.tickets.push(ticket.clone());
            }
        }

        let bucket = match category {
            Category::Excluded => &mut self.excluded,
            Category::Breaking => &mut self.breaking,
            Category::Added => &mut self.added,
            Category::Changed => &mut self.changed,
            Category::Fixed => &mut self.fixed,
        };
        bucket.push(record.subject);
    }

    /// The rendered bucket for a category
    pub fn bucket(&self, category: Category) -> &[String] {
        match category {
            Category::Excluded => &self.excluded,
            Category::Breaking => &self.breaking,
            Category::Added => &self.added,
            Category::Changed => &self.changed,
            Category::Fixed => &self.fixed,
        }
    }

    /// True when no commit landed in any rendered bucket
    pub fn is_empty(&self) -> bool {
        Category::RENDER_ORDER
            .iter()
            .all(|c| self.bucket(*c).is_empty())
    }

    /// Total number of commits across all buckets, excluded included
    pub fn len(&self) -> usize {
        self.breaking.len()
            + self.added.len()
            + self.changed.len()
            + self.fixed.len()
            + self.excluded.len()
    }
}
