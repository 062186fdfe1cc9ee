//! Category classification
//!
//! Assigns each normalized commit subject to exactly one changelog
//! category using an ordered, first-match-wins keyword rule table. The
//! keyword sets are configuration data; rule order alone resolves any
//! overlap between them.

use serde::{Deserialize, Serialize};
use tracing::trace;

use shiplog_core::config::KeywordsConfig;

/// Changelog category. Every commit gets exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Test/tooling work, never rendered in the changelog
    Excluded,
    /// Breaking changes
    Breaking,
    /// New functionality (the default bucket)
    Added,
    /// Behavior changes
    Changed,
    /// Defect and maintenance work
    Fixed,
}

impl Category {
    /// Rendering order of the changelog subsections. Excluded is absent:
    /// it only ever appears in the diagnostic report.
    pub const RENDER_ORDER: [Category; 4] = [
        Category::Breaking,
        Category::Added,
        Category::Changed,
        Category::Fixed,
    ];

    /// Subsection heading for this category
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Excluded => "Excluded",
            Self::Breaking => "Breaking",
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Fixed => "Fixed",
        }
    }
}

/// Ordered keyword classifier
pub struct Classifier {
    // Rule order is the contract: excluded, breaking, changed, fixed.
    rules: Vec<(Category, Vec<String>)>,
}

impl Classifier {
    /// Build the rule table from configured keyword sets
    pub fn new(config: &KeywordsConfig) -> Self {
        let lower = |set: &[String]| -> Vec<String> {
            set.iter().map(|k| k.to_lowercase()).collect()
        };

        Self {
            rules: vec![
                (Category::Excluded, lower(&config.excluded)),
                (Category::Breaking, lower(&config.breaking)),
                (Category::Changed, lower(&config.changed)),
                (Category::Fixed, lower(&config.fixed)),
            ],
        }
    }

    /// Classify one normalized commit subject.
    ///
    /// Total and deterministic: the first rule whose keyword set contains
    /// a case-insensitive substring of the subject wins, and anything
    /// unmatched is Added.
    pub fn classify(&self, subject: &str) -> Category {
        let haystack = subject.to_lowercase();

        for (category, keywords) in &self.rules {
            if keywords.iter().any(|k| haystack.contains(k.as_str())) {
                trace!(subject, category = ?category, "classified commit");
                return *category;
            }
        }

        trace!(subject, "classified commit as default Added");
        Category::Added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new(&KeywordsConfig::default())
    }

    #[test]
    fn test_fixed() {
        assert_eq!(classifier().classify("Fix login bug"), Category::Fixed);
    }

    #[test]
    fn test_changed() {
        assert_eq!(classifier().classify("Update docs"), Category::Changed);
    }

    #[test]
    fn test_added_is_default() {
        assert_eq!(classifier().classify("Add dark mode"), Category::Added);
    }

    #[test]
    fn test_excluded() {
        assert_eq!(
            classifier().classify("test: add e2e suite"),
            Category::Excluded
        );
    }

    #[test]
    fn test_breaking() {
        assert_eq!(
            classifier().classify("Deprecate the v2 endpoints"),
            Category::Breaking
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classifier().classify("UPDATE DOCS"), Category::Changed);
        assert_eq!(classifier().classify("fIx It"), Category::Fixed);
    }

    #[test]
    fn test_rule_order_resolves_overlap() {
        // "Update docs" contains both a changed keyword ("update") and a
        // fixed keyword ("docs"); changed is checked first and wins.
        assert_eq!(classifier().classify("Update docs"), Category::Changed);
        // Excluded outranks everything.
        assert_eq!(
            classifier().classify("Update storybook stories"),
            Category::Excluded
        );
    }

    #[test]
    fn test_totality() {
        // Every subject lands in exactly one bucket, including odd inputs
        for subject in ["", "   ", "???", "Merge stuff", "släpp version"] {
            let _ = classifier().classify(subject);
        }
    }

    #[test]
    fn test_custom_keywords() {
        let mut config = KeywordsConfig::default();
        config.breaking.push("removed".to_string());

        let classifier = Classifier::new(&config);
        assert_eq!(
            classifier.classify("Removed the legacy importer"),
            Category::Breaking
        );
    }

    #[test]
    fn test_deterministic() {
        let subjects = ["Fix a", "Update b", "Add c", "test: d"];
        let first: Vec<Category> = subjects.iter().map(|s| classifier().classify(s)).collect();
        let second: Vec<Category> = subjects.iter().map(|s| classifier().classify(s)).collect();
        assert_eq!(first, second);
    }
}
