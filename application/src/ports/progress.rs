//! Progress notification port
//!
//! Defines the interface for reporting progress during a deliberation.

use triad_domain::{AgentRole, DeliberationPhase};

/// Callback for progress updates during deliberation execution
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, web UI, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts (the review phase restarts on each
    /// revision round)
    fn on_phase_start(&self, phase: &DeliberationPhase);

    /// Called when a persona turn completes within a phase
    fn on_turn_complete(&self, phase: &DeliberationPhase, role: AgentRole);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: &DeliberationPhase);

    /// Called when the reviewer requests a revision (`round` is 1-based)
    fn on_revision_requested(&self, round: u32) {
        let _ = round;
    }
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &DeliberationPhase) {}
    fn on_turn_complete(&self, _phase: &DeliberationPhase, _role: AgentRole) {}
    fn on_phase_complete(&self, _phase: &DeliberationPhase) {}
}
