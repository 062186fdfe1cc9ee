//! Changelog generation
//!
//! Facade wiring the pipeline together: normalize each raw subject,
//! collect ticket keys, classify, fold into a batch, then splice the
//! release section into the document and render the diagnostic report.

use tracing::{debug, info, instrument};

use shiplog_core::config::Config;
use shiplog_core::error::ChangelogError;

use crate::classify::Classifier;
use crate::normalize::Normalizer;
use crate::report::ReleaseReport;
use crate::splice::splice_release;
use crate::types::{CommitRecord, ReleaseBatch};

/// Result of one generation run
#[derive(Debug, Clone)]
pub struct GeneratedRelease {
    /// The full new document line sequence
    pub document: Vec<String>,
    /// The classified batch behind it
    pub batch: ReleaseBatch,
    /// Rendered diagnostic report
    pub report: String,
}

/// Changelog generator
pub struct ChangelogGenerator {
    normalizer: Normalizer,
    classifier: Classifier,
    report: ReleaseReport,
    insert_offset: usize,
}

impl ChangelogGenerator {
    /// Create a generator from configuration
    pub fn new(config: &Config) -> Result<Self, ChangelogError> {
        Ok(Self {
            normalizer: Normalizer::new(&config.ticket)?,
            classifier: Classifier::new(&config.keywords),
            report: ReleaseReport::new(config.report.clone()),
            insert_offset: config.changelog.insert_offset,
        })
    }

    /// Fold raw commit subjects into a classified batch
    #[instrument(skip(self, subjects))]
    pub fn collect<'a, I>(&self, subjects: I) -> ReleaseBatch
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut batch = ReleaseBatch::new();

        for raw in subjects {
            let normalized = self.normalizer.normalize(raw);
            let category = self.classifier.classify(&normalized.text);
            batch.push(
                category,
                CommitRecord::new(raw, normalized.text, normalized.ticket),
            );
        }

        debug!(
            breaking = batch.breaking.len(),
            added = batch.added.len(),
            changed = batch.changed.len(),
            fixed = batch.fixed.len(),
            excluded = batch.excluded.len(),
            tickets = batch.tickets.len(),
            "commit batch classified"
        );

        batch
    }

    /// Run the whole pipeline against an existing document.
    ///
    /// `lines` is the current document content; the insertion offset comes
    /// from configuration and is 0 for an empty document.
    #[instrument(skip(self, lines, subjects), fields(line_count = lines.len(), release))]
    pub fn generate<'a, I>(
        &self,
        lines: &[String],
        release: &str,
        date: &str,
        subjects: I,
    ) -> GeneratedRelease
    where
        I: IntoIterator<Item = &'a str>,
    {
        let batch = self.collect(subjects);

        let start = if lines.is_empty() {
            0
        } else {
            self.insert_offset
        };
        let document = splice_release(lines, start, release, date, &batch);
        let report = self.report.render(&batch);

        info!(
            release,
            date,
            inserted = document.len() - lines.len(),
            "changelog section generated"
        );

        GeneratedRelease {
            document,
            batch,
            report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> ChangelogGenerator {
        ChangelogGenerator::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_collect_example_batch() {
        let subjects = [
            "Fix login bug (#12)",
            "M3-1001: Update docs",
            "Add dark mode",
            "test: add e2e suite",
        ];

        let batch = generator().collect(subjects);

        assert_eq!(batch.fixed, vec!["Fix login bug"]);
        assert_eq!(batch.changed, vec!["Update docs"]);
        assert_eq!(batch.added, vec!["Add dark mode"]);
        assert_eq!(batch.excluded, vec!["test: add e2e suite"]);
        assert_eq!(batch.tickets, vec!["M3-1001"]);
        assert!(batch.breaking.is_empty());
    }

    #[test]
    fn test_collect_is_repeatable() {
        let subjects = ["Fix a (#1)", "M3-2: Update b", "Add c"];
        let first = generator().collect(subjects);
        let second = generator().collect(subjects);

        assert_eq!(first.fixed, second.fixed);
        assert_eq!(first.changed, second.changed);
        assert_eq!(first.added, second.added);
        assert_eq!(first.tickets, second.tickets);
    }

    #[test]
    fn test_generate_full_run() {
        let lines: Vec<String> = [
            "# Changelog",
            "",
            "All notable changes to this project.",
            "",
            "## [2023-11-11] - v1.1.0",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let result = generator().generate(
            &lines,
            "v1.2.0",
            "2024-01-01",
            ["Add dark mode", "M3-12: Fix login bug (#12)"],
        );

        // Header block untouched
        assert_eq!(result.document[..4], lines[..4]);
        assert_eq!(result.document[4], "");
        assert_eq!(result.document[5], "## [2024-01-01] - v1.2.0");
        assert!(result.document.contains(&"### Added:".to_string()));
        assert!(result.document.contains(&"- Fix login bug".to_string()));
        // Previous release header shifted, not lost
        assert!(result
            .document
            .contains(&"## [2023-11-11] - v1.1.0".to_string()));
        assert!(result.report.contains("key in(M3-12)"));
    }

    #[test]
    fn test_generate_empty_batch() {
        let lines: Vec<String> = vec!["# Changelog".to_string(); 6];
        let result =
            generator().generate(&lines, "v1.0.1", "2024-02-02", std::iter::empty::<&str>());

        // Only the dated header block is inserted
        assert_eq!(result.document.len(), lines.len() + 3);
        assert!(result.batch.is_empty());
        assert!(!result.report.contains("key in("));
    }

    #[test]
    fn test_generate_empty_document_starts_at_zero() {
        let result = generator().generate(&[], "v1.0.0", "2024-01-01", ["Add a thing"]);
        assert_eq!(result.document[1], "## [2024-01-01] - v1.0.0");
    }
}
