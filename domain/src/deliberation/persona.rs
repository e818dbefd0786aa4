//! Personas - the fixed role definitions for the deliberation pipeline
//!
//! Personas are static configuration: defined once at process start,
//! never mutated. Each carries the system-level instructions that shape
//! one kind of agent behavior.

use serde::{Deserialize, Serialize};

/// Role of a persona in the deliberation (closed enumeration)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentRole {
    Researcher,
    Reviewer,
    Responder,
}

impl AgentRole {
    pub fn as_str(&self) -> &str {
        match self {
            AgentRole::Researcher => "researcher",
            AgentRole::Reviewer => "reviewer",
            AgentRole::Responder => "responder",
        }
    }
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fixed role definition (immutable)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    /// Stable identifier (e.g. "researcher")
    pub id: &'static str,
    /// Human-readable label
    pub name: &'static str,
    /// The role this persona plays
    pub role: AgentRole,
    /// System-level behavioral instructions
    pub instructions: &'static str,
}

static RESEARCHER: Persona = Persona {
    id: "researcher",
    name: "Researcher",
    role: AgentRole::Researcher,
    instructions: r#"You are a thorough Researcher agent. Given a user query, produce a structured analysis with:
- Key facts and relevant context
- Multiple perspectives if applicable
- Data points, examples, or evidence
Be comprehensive but concise. Output in bullet points."#,
};

static REVIEWER: Persona = Persona {
    id: "reviewer",
    name: "Reviewer",
    role: AgentRole::Reviewer,
    instructions: r#"You are a critical Reviewer agent. You receive research from another agent and must:
1. Check for factual accuracy and completeness
2. Identify gaps, biases, or unsupported claims
3. Either APPROVE the research or request a revision

If the research is good enough, reply with your critique followed by "APPROVED".
If it needs improvement, start your response EXACTLY with "REVISE:" followed by specific feedback on what to fix."#,
};

static RESPONDER: Persona = Persona {
    id: "responder",
    name: "Responder",
    role: AgentRole::Responder,
    instructions: r#"You are the Final Responder agent. You receive:
- The original user query
- Approved research from a Researcher
- A review from a Reviewer

Synthesize everything into a clear, well-structured, user-facing answer.
Be direct and helpful. Use markdown formatting where appropriate.
Do NOT mention the internal agent process."#,
};

impl Persona {
    /// Look up the persona for a role
    pub fn for_role(role: AgentRole) -> &'static Persona {
        match role {
            AgentRole::Researcher => &RESEARCHER,
            AgentRole::Reviewer => &REVIEWER,
            AgentRole::Responder => &RESPONDER,
        }
    }

    pub fn researcher() -> &'static Persona {
        &RESEARCHER
    }

    pub fn reviewer() -> &'static Persona {
        &REVIEWER
    }

    pub fn responder() -> &'static Persona {
        &RESPONDER
    }
}
