//! LLM provider adapters

pub mod routellm;

pub use routellm::RouteLlmGateway;
