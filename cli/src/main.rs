//! CLI entrypoint for Triad
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;
use triad_application::ports::progress::ProgressNotifier;
use triad_application::{RunDeliberationInput, RunDeliberationUseCase};
use triad_domain::{AgentRole, DeliberationPhase, Model};
use triad_infrastructure::{ConfigLoader, RouteLlmGateway};

#[derive(Parser, Debug)]
#[command(name = "triad", version, about = "Three-role AI deliberation pipeline")]
struct Cli {
    /// The query to deliberate on
    query: Option<String>,

    /// Model to use for every persona call (e.g. "route-llm", "gpt-4o")
    #[arg(short, long)]
    model: Option<String>,

    /// Path to an explicit config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ignore config files and use built-in defaults
    #[arg(long)]
    no_config: bool,

    /// Print the full result as JSON (wire format)
    #[arg(long)]
    json: bool,

    /// Show the intermediate agent turns, not just the final answer
    #[arg(long)]
    show_agents: bool,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Prints pipeline progress to stderr as the deliberation advances
struct ConsoleProgress;

impl ProgressNotifier for ConsoleProgress {
    fn on_phase_start(&self, phase: &DeliberationPhase) {
        eprintln!("[{}] ...", phase.display_name());
    }

    fn on_turn_complete(&self, phase: &DeliberationPhase, role: AgentRole) {
        eprintln!("[{}] {} done", phase.display_name(), role);
    }

    fn on_phase_complete(&self, _phase: &DeliberationPhase) {}

    fn on_revision_requested(&self, round: u32) {
        eprintln!("[Review] revision {} requested", round);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let query = match cli.query {
        Some(q) => q,
        None => bail!("Query is required."),
    };

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    info!("Starting triad deliberation");

    // === Dependency Injection ===
    // Create infrastructure adapter (RouteLLM gateway)
    let gateway = Arc::new(RouteLlmGateway::from_config(&config)?);

    // Ctrl-C aborts the deliberation between pipeline steps
    let token = CancellationToken::new();
    {
        let token = token.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                token.cancel();
            }
        });
    }

    let use_case = RunDeliberationUseCase::new(gateway)
        .with_default_model(config.models.parse_default())
        .with_cancellation(token);

    // Build input
    let mut input = RunDeliberationInput::new(query);
    if let Some(model_str) = &cli.model {
        let model: Model = model_str.parse().unwrap();
        input = input.with_model(model);
    }

    // Execute with or without progress reporting
    let result = if cli.quiet {
        use_case.execute(input).await?
    } else {
        use_case.execute_with_progress(input, &ConsoleProgress).await?
    };

    // Output results
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if cli.show_agents {
        for turn in &result.agent_messages {
            println!("--- {} ---", turn.agent_name);
            println!("{}", turn.content);
            println!();
        }
        println!("=== Final Answer ===");
    }

    println!("{}", result.final_answer);

    Ok(())
}
