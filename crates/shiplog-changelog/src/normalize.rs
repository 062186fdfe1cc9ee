//! Commit subject normalization
//!
//! Strips the per-line artifacts left by the merge workflow: the
//! `(#<digits>)` pull-request reference appended by the forge, and the
//! leading ticket-key prefix some authors put in front of the subject.

use regex::Regex;
use std::sync::LazyLock;

use shiplog_core::config::TicketConfig;
use shiplog_core::error::ChangelogError;

/// Regex for the merged pull-request reference.
///
/// Deliberately unanchored: the reference normally trails the subject but
/// a mid-string occurrence is removed as well.
static PR_REF_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(#\d+\)").expect("Invalid regex"));

/// A commit subject after normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSubject {
    /// Subject with PR reference and ticket prefix removed
    pub text: String,
    /// The ticket key stripped from the front, if any (e.g. `M3-1001`)
    pub ticket: Option<String>,
}

/// Normalizes raw commit subjects
pub struct Normalizer {
    ticket_regex: Regex,
}

impl Normalizer {
    /// Create a normalizer for the configured ticket project code
    pub fn new(config: &TicketConfig) -> Result<Self, ChangelogError> {
        // Project code, dash, 1-5 digits, optional trailing separator/colon.
        // Anchored: a ticket key is only a prefix, never stripped mid-string.
        let pattern = format!(
            r"^(?P<key>{}-\d{{1,5}})\b[\s:.-]*",
            regex::escape(&config.project_code)
        );
        let ticket_regex =
            Regex::new(&pattern).map_err(|e| ChangelogError::InvalidTicketPattern(e.to_string()))?;

        Ok(Self { ticket_regex })
    }

    /// Normalize one raw commit subject
    pub fn normalize(&self, raw: &str) -> NormalizedSubject {
        let without_pr = PR_REF_REGEX.replace_all(raw, "");
        let trimmed = without_pr.trim();

        match self.ticket_regex.captures(trimmed) {
            Some(caps) => {
                let whole = caps.get(0).expect("capture 0 always present");
                // A zero-length match carries no ticket; treat as no-match
                // so the subject passes through untouched.
                if whole.as_str().is_empty() {
                    return NormalizedSubject {
                        text: trimmed.to_string(),
                        ticket: None,
                    };
                }

                let key = caps.name("key").map(|m| m.as_str().to_string());
                let rest = trimmed[whole.end()..].trim().to_string();

                NormalizedSubject {
                    text: rest,
                    ticket: key,
                }
            }
            None => NormalizedSubject {
                text: trimmed.to_string(),
                ticket: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new(&TicketConfig::default()).unwrap()
    }

    #[test]
    fn test_strip_pr_reference() {
        let n = normalizer();
        let out = n.normalize("Fix login bug (#12)");
        assert_eq!(out.text, "Fix login bug");
        assert!(out.ticket.is_none());
    }

    #[test]
    fn test_strip_pr_reference_mid_string() {
        // The PR pattern is not anchored to the end of the subject
        let n = normalizer();
        let out = n.normalize("Fix login bug (#12) for SSO users");
        assert_eq!(out.text, "Fix login bug  for SSO users");
    }

    #[test]
    fn test_strip_ticket_prefix() {
        let n = normalizer();
        let out = n.normalize("M3-1001: Update docs");
        assert_eq!(out.text, "Update docs");
        assert_eq!(out.ticket.as_deref(), Some("M3-1001"));
    }

    #[test]
    fn test_ticket_prefix_without_colon() {
        let n = normalizer();
        let out = n.normalize("M3-42 Add dark mode");
        assert_eq!(out.text, "Add dark mode");
        assert_eq!(out.ticket.as_deref(), Some("M3-42"));
    }

    #[test]
    fn test_ticket_key_not_stripped_mid_string() {
        let n = normalizer();
        let out = n.normalize("Revert M3-1001: Update docs");
        assert_eq!(out.text, "Revert M3-1001: Update docs");
        assert!(out.ticket.is_none());
    }

    #[test]
    fn test_no_artifacts_passes_through() {
        let n = normalizer();
        let out = n.normalize("Add dark mode");
        assert_eq!(out.text, "Add dark mode");
        assert!(out.ticket.is_none());
    }

    #[test]
    fn test_pr_reference_and_ticket_prefix() {
        let n = normalizer();
        let out = n.normalize("M3-77: Repair billing export (#3141)");
        assert_eq!(out.text, "Repair billing export");
        assert_eq!(out.ticket.as_deref(), Some("M3-77"));
    }

    #[test]
    fn test_digits_bounded_to_five() {
        let n = normalizer();
        // Six digits exceed the ticket pattern; nothing is stripped
        let out = n.normalize("M3-123456: Update docs");
        assert_eq!(out.text, "M3-123456: Update docs");
        assert!(out.ticket.is_none());
    }

    #[test]
    fn test_project_code_is_escaped() {
        let config = TicketConfig {
            project_code: "A1".to_string(),
        };
        let n = Normalizer::new(&config).unwrap();
        let out = n.normalize("A1-5: Change quota handling");
        assert_eq!(out.ticket.as_deref(), Some("A1-5"));
        assert_eq!(out.text, "Change quota handling");
    }

    #[test]
    fn test_whitespace_trimmed() {
        let n = normalizer();
        let out = n.normalize("  Add dark mode (#9)  ");
        assert_eq!(out.text, "Add dark mode");
    }
}
