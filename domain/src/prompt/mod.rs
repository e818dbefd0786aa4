//! Prompt construction for the deliberation pipeline

pub mod template;

pub use template::PromptTemplate;
