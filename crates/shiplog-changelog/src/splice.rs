//! Changelog document splicing
//!
//! Inserts a new dated release section into an existing ordered line
//! sequence. Only insertions happen, at monotonically increasing
//! positions: existing lines are never deleted, mutated, or reordered.

use tracing::{debug, instrument};

use crate::classify::Category;
use crate::types::ReleaseBatch;

/// Running line offset for positional insertion.
///
/// Advances by exactly one per inserted line, so every insertion lands
/// immediately after the previous one.
#[derive(Debug, Clone, Copy)]
pub struct InsertionCursor {
    pos: usize,
}

impl InsertionCursor {
    /// Create a cursor at the given start offset
    pub fn new(start: usize) -> Self {
        Self { pos: start }
    }

    /// Current offset
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Insert one line at the cursor and advance
    pub fn insert(&mut self, lines: &mut Vec<String>, line: impl Into<String>) {
        lines.insert(self.pos, line.into());
        self.pos += 1;
    }
}

/// Splice a release section into the document.
///
/// Returns the full new line sequence. Lines before `start` are
/// untouched; lines at and after `start` shift later by exactly the
/// number of inserted lines. A `start` beyond the end of the document is
/// clamped to the end (documentless-root mode passes 0 with an empty
/// document).
#[instrument(skip(lines, batch), fields(line_count = lines.len(), start))]
pub fn splice_release(
    lines: &[String],
    start: usize,
    release: &str,
    date: &str,
    batch: &ReleaseBatch,
) -> Vec<String> {
    let mut out = lines.to_vec();
    let mut cursor = InsertionCursor::new(start.min(out.len()));

    cursor.insert(&mut out, "");
    // Date before release label is a compatibility contract with the
    // existing document convention.
    cursor.insert(&mut out, format!("## [{}] - {}", date, release));
    cursor.insert(&mut out, "");

    for category in Category::RENDER_ORDER {
        let bucket = batch.bucket(category);
        if bucket.is_empty() {
            continue;
        }

        cursor.insert(&mut out, format!("### {}:", category.display_name()));
        for text in bucket {
            cursor.insert(&mut out, format!("- {}", text));
        }
        cursor.insert(&mut out, "");
    }

    debug!(
        inserted = out.len() - lines.len(),
        end = cursor.position(),
        "release section spliced"
    );

    out
}
