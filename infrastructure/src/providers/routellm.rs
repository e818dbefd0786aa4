//! OpenAI-compatible gateway adapter for Abacus RouteLLM
//!
//! RouteLLM exposes the standard `/chat/completions` surface behind a
//! custom base URL, so the same adapter also talks to any other
//! OpenAI-compatible endpoint (a local server, a proxy, etc.).

use crate::config::FileConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use triad_application::ports::llm_gateway::{GatewayError, LlmGateway};
use triad_domain::Model;

/// Gateway adapter for an OpenAI-compatible chat completion endpoint
pub struct RouteLlmGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RouteLlmGateway {
    /// Create a gateway against the given endpoint
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Create a gateway from file configuration
    ///
    /// The API key is read from the environment variable named in the
    /// config; a missing key fails fast here rather than on first use.
    pub fn from_config(config: &FileConfig) -> Result<Self, GatewayError> {
        let api_key = std::env::var(&config.provider.api_key_env).map_err(|_| {
            GatewayError::ConnectionError(format!(
                "environment variable {} is not set",
                config.provider.api_key_env
            ))
        })?;

        Self::new(
            &config.provider.base_url,
            api_key,
            Duration::from_secs(config.provider.timeout_secs),
        )
    }
}

#[async_trait]
impl LlmGateway for RouteLlmGateway {
    async fn complete(
        &self,
        model: &Model,
        system_prompt: &str,
        prompt: &str,
    ) -> Result<String, GatewayError> {
        let request = ChatRequest {
            model: model.as_str(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        debug!(model = %model, "Sending chat completion request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else if e.is_connect() {
                    GatewayError::ConnectionError(e.to_string())
                } else {
                    GatewayError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(GatewayError::ModelNotAvailable(model.to_string()));
            }
            return Err(GatewayError::RequestFailed(format!(
                "endpoint returned {}: {}",
                status, body
            )));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| GatewayError::MalformedResponse("no choices in response".to_string()))
    }
}

/// Request body for `/chat/completions`
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response body for `/chat/completions` (only the fields we read)
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = ChatRequest {
            model: "route-llm",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are a thorough Researcher agent.",
                },
                ChatMessage {
                    role: "user",
                    content: "User query: \"test\"",
                },
            ],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "route-llm");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
    }

    #[test]
    fn test_response_deserialization() {
        let body = r#"{
            "id": "cmpl-1",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": { "role": "assistant", "content": "Research output" },
                    "finish_reason": "stop"
                }
            ],
            "usage": { "total_tokens": 42 }
        }"#;

        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Research output");
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let gateway = RouteLlmGateway::new(
            "https://routellm.abacus.ai/v1/",
            "key",
            Duration::from_secs(30),
        )
        .unwrap();
        assert_eq!(gateway.base_url, "https://routellm.abacus.ai/v1");
    }
}
