//! Reviewer verdict parsing.
//!
//! Extracts the structured approve/revise decision from a free-form
//! reviewer response. Pure domain logic - no I/O, just text matching.

/// Literal prefix a reviewer must emit to request a revision.
///
/// This is a contract with the Reviewer persona's instructions, which
/// mandate starting the response with exactly this token.
pub const REVISION_PREFIX: &str = "REVISE:";

/// Parsed decision from a reviewer turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The research stands as-is
    Approved,
    /// The reviewer wants another research pass
    ReviseRequested {
        /// Feedback text following the `REVISE:` prefix, trimmed
        feedback: String,
    },
}

impl Verdict {
    /// Parse a reviewer response.
    ///
    /// The match is a literal case-sensitive prefix check on the trimmed
    /// text - not a substring search. Any response that does not start
    /// with `REVISE:` counts as approval, including an explicit APPROVED
    /// signal and any malformed or truncated output. Absence of the
    /// revise marker is the sole approval signal (fail-open toward
    /// accepting research rather than looping on ambiguous output).
    pub fn parse(response: &str) -> Verdict {
        let trimmed = response.trim();
        match trimmed.strip_prefix(REVISION_PREFIX) {
            Some(feedback) => Verdict::ReviseRequested {
                feedback: feedback.trim().to_string(),
            },
            None => Verdict::Approved,
        }
    }

    /// Returns `true` if this verdict approves the research.
    pub fn is_approved(&self) -> bool {
        matches!(self, Verdict::Approved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_approval() {
        assert_eq!(Verdict::parse("Good coverage. APPROVED"), Verdict::Approved);
    }

    #[test]
    fn test_revise_extracts_feedback() {
        let verdict = Verdict::parse("REVISE: Missing performance data");
        assert_eq!(
            verdict,
            Verdict::ReviseRequested {
                feedback: "Missing performance data".to_string()
            }
        );
        assert!(!verdict.is_approved());
    }

    #[test]
    fn test_prefix_must_lead() {
        // Substring occurrences do not trigger the revision branch
        assert_eq!(Verdict::parse("We REVISE: this"), Verdict::Approved);
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        assert_eq!(Verdict::parse("revise: lowercase"), Verdict::Approved);
    }

    #[test]
    fn test_malformed_output_is_approval() {
        // Fail-open: ambiguous or truncated reviewer output never loops
        assert_eq!(Verdict::parse(""), Verdict::Approved);
        assert_eq!(Verdict::parse("REVIS"), Verdict::Approved);
    }

    #[test]
    fn test_leading_whitespace_is_trimmed_first() {
        let verdict = Verdict::parse("  REVISE: needs sources\n");
        assert_eq!(
            verdict,
            Verdict::ReviseRequested {
                feedback: "needs sources".to_string()
            }
        );
    }

    #[test]
    fn test_empty_feedback() {
        let verdict = Verdict::parse("REVISE:");
        assert_eq!(
            verdict,
            Verdict::ReviseRequested {
                feedback: String::new()
            }
        );
    }
}
