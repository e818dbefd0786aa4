//! Deliberation value objects - immutable result types for a run.
//!
//! These types carry the externally visible output of a deliberation:
//! - [`AgentTurn`] - One completed persona invocation
//! - [`DeliberationResult`] - Final answer plus the full transcript
//!
//! Field names serialize in camelCase because the consuming API route
//! exposes them verbatim as the wire format.

use crate::deliberation::persona::{AgentRole, Persona};
use serde::{Deserialize, Serialize};

/// One completed invocation of a persona
///
/// Immutable once created; appended to the run's transcript in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentTurn {
    /// Stable persona identifier
    pub agent_id: String,
    /// Human-readable persona label
    pub agent_name: String,
    /// Role the persona played
    pub role: AgentRole,
    /// Raw trimmed text output
    pub content: String,
}

impl AgentTurn {
    /// Record a turn for the given persona.
    ///
    /// The content is trimmed; the raw text is otherwise preserved so the
    /// transcript stays auditable (reviewer verdicts included).
    pub fn new(persona: &Persona, content: impl Into<String>) -> Self {
        Self {
            agent_id: persona.id.to_string(),
            agent_name: persona.name.to_string(),
            role: persona.role,
            content: content.into().trim().to_string(),
        }
    }
}

/// Complete result of a deliberation run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliberationResult {
    /// The Responder's final, user-facing answer
    pub final_answer: String,
    /// Full transcript of agent turns in chronological order
    pub agent_messages: Vec<AgentTurn>,
}

impl DeliberationResult {
    pub fn new(final_answer: impl Into<String>, agent_messages: Vec<AgentTurn>) -> Self {
        Self {
            final_answer: final_answer.into(),
            agent_messages,
        }
    }

    /// Returns an iterator over the turns taken by a given role.
    pub fn turns_for(&self, role: AgentRole) -> impl Iterator<Item = &AgentTurn> {
        self.agent_messages.iter().filter(move |t| t.role == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_trims_content() {
        let turn = AgentTurn::new(Persona::researcher(), "  draft analysis\n");
        assert_eq!(turn.content, "draft analysis");
        assert_eq!(turn.agent_id, "researcher");
        assert_eq!(turn.agent_name, "Researcher");
    }

    #[test]
    fn test_wire_field_names() {
        let result = DeliberationResult::new(
            "done",
            vec![AgentTurn::new(Persona::responder(), "done")],
        );
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("finalAnswer").is_some());
        let messages = json.get("agentMessages").unwrap().as_array().unwrap();
        assert!(messages[0].get("agentId").is_some());
        assert!(messages[0].get("agentName").is_some());
        assert_eq!(messages[0].get("role").unwrap(), "responder");
    }

    #[test]
    fn test_turns_for_filters_by_role() {
        let result = DeliberationResult::new(
            "answer",
            vec![
                AgentTurn::new(Persona::researcher(), "r1"),
                AgentTurn::new(Persona::reviewer(), "APPROVED"),
                AgentTurn::new(Persona::responder(), "answer"),
            ],
        );
        assert_eq!(result.turns_for(AgentRole::Researcher).count(), 1);
        assert_eq!(result.turns_for(AgentRole::Reviewer).count(), 1);
    }
}
