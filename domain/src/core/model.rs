//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available LLM models (Value Object)
///
/// This is a domain concept representing the completion backends a
/// deliberation can run against. Every persona call within a single
/// deliberation uses the same model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Abacus RouteLLM router (default)
    RouteLlm,
    Gpt4o,
    Claude35Sonnet,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::RouteLlm => "route-llm",
            Model::Gpt4o => "gpt-4o",
            Model::Claude35Sonnet => "claude-3-5-sonnet",
            Model::Custom(s) => s,
        }
    }

    /// Human-readable label for selection UIs
    pub fn display_name(&self) -> &str {
        match self {
            Model::RouteLlm => "Abacus RouteLLM (Default)",
            Model::Gpt4o => "GPT-4o",
            Model::Claude35Sonnet => "Claude 3.5 Sonnet",
            Model::Custom(s) => s,
        }
    }

    /// The models offered by default
    pub fn available_models() -> Vec<Model> {
        vec![Model::RouteLlm, Model::Gpt4o, Model::Claude35Sonnet]
    }
}

impl Default for Model {
    /// Returns the default model (RouteLLM)
    fn default() -> Self {
        Model::RouteLlm
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "route-llm" => Model::RouteLlm,
            "gpt-4o" => Model::Gpt4o,
            "claude-3-5-sonnet" => Model::Claude35Sonnet,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().expect("Model parsing is infallible"))
    }
}
