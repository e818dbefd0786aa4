//! Query value object

use serde::{Deserialize, Serialize};

/// A user query to be deliberated on (Value Object)
///
/// Guaranteed non-empty after trimming; the deliberation pipeline
/// validates raw input through [`Query::try_new`] before issuing any
/// completion call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    content: String,
}

impl Query {
    /// Try to create a new query, returning None if the content is
    /// empty or only whitespace
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the query content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_empty() {
        assert!(Query::try_new("").is_none());
        assert!(Query::try_new("   ").is_none());
    }

    #[test]
    fn test_try_new_valid() {
        let q = Query::try_new("What are microservices?").unwrap();
        assert_eq!(q.content(), "What are microservices?");
        assert_eq!(q.to_string(), "What are microservices?");
    }

    #[test]
    fn test_inner_whitespace_preserved() {
        // Only fully-blank input is rejected; padding stays intact for
        // the prompt templates to handle.
        let q = Query::try_new("  padded  ").unwrap();
        assert_eq!(q.content(), "  padded  ");
    }
}
