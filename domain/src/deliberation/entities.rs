//! Deliberation domain entities

use serde::{Deserialize, Serialize};

/// Hard ceiling on researcher re-runs within one deliberation.
///
/// Total researcher calls are bounded by `1 + MAX_REVISIONS` and reviewer
/// calls by `MAX_REVISIONS + 1`, so one run issues at most 7 completion
/// calls (3 in the best case of immediate approval).
pub const MAX_REVISIONS: u32 = 2;

/// Phase of a deliberation run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliberationPhase {
    /// Research phase - the researcher drafts an analysis of the query
    Research,
    /// Review phase - the reviewer approves or requests a revision
    Review,
    /// Respond phase - the responder synthesizes the final answer
    Respond,
}

impl DeliberationPhase {
    pub fn as_str(&self) -> &str {
        match self {
            DeliberationPhase::Research => "research",
            DeliberationPhase::Review => "review",
            DeliberationPhase::Respond => "respond",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            DeliberationPhase::Research => "Research",
            DeliberationPhase::Review => "Review",
            DeliberationPhase::Respond => "Final Response",
        }
    }
}

impl std::fmt::Display for DeliberationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
