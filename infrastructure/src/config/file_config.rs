//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use serde::{Deserialize, Serialize};
use triad_domain::Model;

/// Complete file configuration (raw TOML structure)
///
/// # Example
///
/// ```toml
/// [provider]
/// base_url = "https://routellm.abacus.ai/v1"
/// api_key_env = "ABACUS_API_KEY"
/// timeout_secs = 300
///
/// [models]
/// default = "route-llm"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion backend settings
    pub provider: FileProviderConfig,
    /// Model selection
    pub models: FileModelsConfig,
}

/// Completion backend configuration from TOML (`[provider]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL of the OpenAI-compatible endpoint
    pub base_url: String,
    /// Name of the environment variable holding the API key
    ///
    /// The key itself never lives in the config file.
    pub api_key_env: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://routellm.abacus.ai/v1".to_string(),
            api_key_env: "ABACUS_API_KEY".to_string(),
            timeout_secs: 300,
        }
    }
}

/// Model configuration from TOML (`[models]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model used when a run does not specify one
    pub default: Option<String>,
}

impl FileModelsConfig {
    /// Parse the default model, falling back to the domain default
    pub fn parse_default(&self) -> Model {
        match &self.default {
            Some(s) if !s.trim().is_empty() => {
                // Model::from_str is infallible; unknown names become Custom(...)
                s.parse().expect("Model parsing is infallible")
            }
            _ => Model::default(),
        }
    }
}
