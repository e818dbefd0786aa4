//! Run Deliberation use case
//!
//! Orchestrates the fixed three-role deliberation pipeline:
//!
//! ```text
//! query -> Researcher -> Reviewer -> (loop on REVISE:) -> Responder -> answer
//! ```
//!
//! The researcher/reviewer loop is bounded by [`MAX_REVISIONS`], so one
//! run issues between 3 and 7 completion calls and always terminates
//! with exactly one responder turn.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use triad_domain::{
    AgentRole, AgentTurn, DeliberationPhase, DeliberationResult, MAX_REVISIONS, Model, Persona,
    PromptTemplate, Query, Verdict, util::truncate,
};

/// Errors that can occur during deliberation execution
#[derive(Error, Debug)]
pub enum RunDeliberationError {
    #[error("empty query")]
    EmptyQuery,

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Deliberation cancelled")]
    Cancelled,
}

/// Input for the RunDeliberation use case
#[derive(Debug, Clone)]
pub struct RunDeliberationInput {
    /// The raw user query (validated by the use case)
    pub query: String,
    /// Model to use for every persona call; falls back to the use case's
    /// default when absent
    pub model: Option<Model>,
}

impl RunDeliberationInput {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            model: None,
        }
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = Some(model);
        self
    }
}

/// Use case for running a three-role deliberation
///
/// Pure control flow around the injected gateway: no persistent state,
/// safe to invoke concurrently for independent queries. Each run owns
/// its own transcript and revision counter.
pub struct RunDeliberationUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    default_model: Model,
    cancellation_token: Option<CancellationToken>,
}

impl<G: LlmGateway + 'static> RunDeliberationUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            default_model: Model::default(),
            cancellation_token: None,
        }
    }

    /// Set the model used when the input does not specify one
    pub fn with_default_model(mut self, model: Model) -> Self {
        self.default_model = model;
        self
    }

    /// Attach a cancellation token, checked between pipeline steps
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: RunDeliberationInput,
    ) -> Result<DeliberationResult, RunDeliberationError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunDeliberationInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<DeliberationResult, RunDeliberationError> {
        // Validated before any gateway call - bad input must not cost
        // an LLM invocation.
        let query = Query::try_new(input.query).ok_or(RunDeliberationError::EmptyQuery)?;
        let query = query.content();
        let model = input.model.unwrap_or_else(|| self.default_model.clone());

        info!(
            model = %model,
            "Starting deliberation: \"{}\"",
            truncate(query, 80)
        );

        let researcher = Persona::researcher();
        let reviewer = Persona::reviewer();
        let responder = Persona::responder();

        let mut transcript: Vec<AgentTurn> = Vec::new();

        // --- Step 1: Research ---
        self.check_cancelled()?;
        progress.on_phase_start(&DeliberationPhase::Research);

        let mut research = self
            .call_persona(researcher, &PromptTemplate::initial_research(query), &model)
            .await?;
        transcript.push(AgentTurn::new(researcher, &research));
        progress.on_turn_complete(&DeliberationPhase::Research, AgentRole::Researcher);
        progress.on_phase_complete(&DeliberationPhase::Research);

        // --- Step 2: Review (with bounded revision loop) ---
        let mut revisions: u32 = 0;
        let mut review = String::new();

        while revisions <= MAX_REVISIONS {
            self.check_cancelled()?;
            progress.on_phase_start(&DeliberationPhase::Review);

            review = self
                .call_persona(reviewer, &PromptTemplate::review(query, &research), &model)
                .await?;
            transcript.push(AgentTurn::new(reviewer, &review));
            progress.on_turn_complete(&DeliberationPhase::Review, AgentRole::Reviewer);
            progress.on_phase_complete(&DeliberationPhase::Review);

            let feedback = match Verdict::parse(&review) {
                Verdict::Approved => {
                    // Approved (or at least not requesting revision)
                    debug!("Review passed after {} revision(s)", revisions);
                    break;
                }
                Verdict::ReviseRequested { feedback } => feedback,
            };

            if revisions >= MAX_REVISIONS {
                warn!("Max revisions reached, proceeding with current research");
                break;
            }

            info!("Revision {} requested", revisions + 1);
            progress.on_revision_requested(revisions + 1);

            // Re-research with reviewer feedback
            self.check_cancelled()?;
            progress.on_phase_start(&DeliberationPhase::Research);

            research = self
                .call_persona(researcher, &PromptTemplate::revision(query, &feedback), &model)
                .await?;
            transcript.push(AgentTurn::new(researcher, &research));
            progress.on_turn_complete(&DeliberationPhase::Research, AgentRole::Researcher);
            progress.on_phase_complete(&DeliberationPhase::Research);

            revisions += 1;
        }

        // --- Step 3: Final Response ---
        // Runs exactly once regardless of how the review loop terminated.
        self.check_cancelled()?;
        progress.on_phase_start(&DeliberationPhase::Respond);

        let final_answer = self
            .call_persona(
                responder,
                &PromptTemplate::respond(query, &research, &review),
                &model,
            )
            .await?;
        transcript.push(AgentTurn::new(responder, &final_answer));
        progress.on_turn_complete(&DeliberationPhase::Respond, AgentRole::Responder);
        progress.on_phase_complete(&DeliberationPhase::Respond);

        info!("Deliberation complete: {} agent turns", transcript.len());

        Ok(DeliberationResult::new(final_answer, transcript))
    }

    /// Issue one completion call for a persona
    ///
    /// Gateway failures propagate untouched: the whole run aborts with no
    /// partial result, and retries (if any) belong to the gateway.
    async fn call_persona(
        &self,
        persona: &Persona,
        prompt: &str,
        model: &Model,
    ) -> Result<String, RunDeliberationError> {
        let text = self
            .gateway
            .complete(model, persona.instructions, prompt)
            .await?;
        Ok(text.trim().to_string())
    }

    fn check_cancelled(&self) -> Result<(), RunDeliberationError> {
        match &self.cancellation_token {
            Some(token) if token.is_cancelled() => Err(RunDeliberationError::Cancelled),
            _ => Ok(()),
        }
    }
}
