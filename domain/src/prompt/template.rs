//! Prompt templates for the deliberation flow

/// Templates for generating user prompts at each stage
///
/// System prompts come from the persona table; these build the per-call
/// user prompts that thread the query, research, and feedback through
/// the pipeline.
pub struct PromptTemplate;

impl PromptTemplate {
    /// User prompt for the initial research pass
    pub fn initial_research(query: &str) -> String {
        format!(r#"User query: "{}""#, query)
    }

    /// User prompt for the reviewer
    pub fn review(query: &str, research: &str) -> String {
        format!(
            "Original user query: \"{}\"\n\nResearch output:\n{}",
            query, research
        )
    }

    /// User prompt for a researcher re-run after a revision request
    pub fn revision(query: &str, feedback: &str) -> String {
        format!(
            "User query: \"{}\"\n\n\
             Your previous research was reviewed and needs revision.\n\
             Reviewer feedback: {}\n\n\
             Please produce an improved analysis addressing the feedback.",
            query, feedback
        )
    }

    /// User prompt for the final responder
    pub fn respond(query: &str, research: &str, review: &str) -> String {
        format!(
            "Original user query: \"{}\"\n\nApproved research:\n{}\n\nReviewer notes:\n{}",
            query, research, review
        )
    }
}
