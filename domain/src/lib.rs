//! Domain layer for triad
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Deliberation
//!
//! A deliberation is one end-to-end run of the fixed three-role pipeline
//! over a single user query:
//!
//! - **Researcher** drafts a structured analysis of the query
//! - **Reviewer** either approves the draft or demands a revision
//! - **Responder** synthesizes the vetted research into the final answer
//!
//! The researcher/reviewer pair may loop, bounded by [`MAX_REVISIONS`],
//! before the responder runs exactly once.

pub mod core;
pub mod deliberation;
pub mod prompt;
pub mod util;

// Re-export commonly used types
pub use crate::core::{model::Model, query::Query};
pub use deliberation::{
    entities::{DeliberationPhase, MAX_REVISIONS},
    persona::{AgentRole, Persona},
    value_objects::{AgentTurn, DeliberationResult},
    verdict::Verdict,
};
pub use prompt::PromptTemplate;
