//! CLI for the Issue Suggester.
//!
//! This tool asks a web-search grounded Gemini model to propose new issues
//! for one or more public GitHub repositories.

use clap::{Parser, ValueEnum};
use issue_suggester::{
    GenerationRequest, IssueSuggestion, ProcessingResult, RunSummary, Runner, RunnerConfig,
    RunnerError,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Issue Suggester - Generate issue ideas for public GitHub repositories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub repository URLs (e.g. https://github.com/octocat/Hello-World).
    #[arg(required = true)]
    urls: Vec<String>,

    /// Project goals that at least one suggestion should align with.
    #[arg(long)]
    goals: Option<String>,

    /// Look for TODO/FIXME/HACK comments and prioritize resolving them.
    #[arg(long)]
    scan_todos: bool,

    /// Path to the LLM config file.
    #[arg(long, default_value = "config.toml")]
    llm_config_path: PathBuf,

    /// Gemini model to use.
    #[arg(long, env = "ISSUE_SUGGESTER_LLM_MODEL")]
    model: Option<String>,

    /// Gemini API key. Overrides the config file and environment.
    #[arg(long)]
    api_key: Option<String>,

    /// Maximum concurrent generation requests.
    #[arg(long, default_value_t = issue_suggester::runner::DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// How results are written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable listing.
    Text,
    /// The full run summary as JSON.
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();
    let format = args.format;

    match run(args).await {
        Ok(summary) => {
            match format {
                OutputFormat::Text => print_summary(&summary),
                OutputFormat::Json => match serde_json::to_string_pretty(&summary) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        error!(error = %e, "Failed to serialize summary");
                        return ExitCode::from(2);
                    }
                },
            }

            if summary.all_success() {
                ExitCode::from(0)
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Logs go to stderr so JSON output on stdout stays machine readable.
/// Log level filtering comes from the `RUST_LOG` env var (defaults to "info").
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let mut config = RunnerConfig::new(args.llm_config_path).with_concurrency(args.concurrency);
    if let Some(model) = args.model {
        config = config.with_model(model);
    }
    if let Some(api_key) = args.api_key {
        config = config.with_api_key(api_key);
    }

    let requests = args
        .urls
        .into_iter()
        .map(|url| {
            let request = GenerationRequest::new(url).with_scan_todos(args.scan_todos);
            match &args.goals {
                Some(goals) => request.with_project_goals(goals.clone()),
                None => request,
            }
        })
        .collect();

    let runner = Runner::from_config(&config)?;
    Ok(runner.run(requests).await)
}

/// Prints suggestions per repository followed by the run summary.
fn print_summary(summary: &RunSummary) {
    for result in &summary.results {
        println!("\n{}", result.repository());
        match result {
            ProcessingResult::Success { suggestions, .. } => {
                if suggestions.is_empty() {
                    println!("  No suggestions returned.");
                }
                for (i, suggestion) in suggestions.iter().enumerate() {
                    print_suggestion(i + 1, suggestion);
                }
            }
            ProcessingResult::Failed {
                error, retryable, ..
            } => {
                println!("  Error: {error}");
                if *retryable {
                    println!("  (retrying may help)");
                }
            }
        }
    }

    println!("\nSummary:");
    println!(
        "  Repositories processed: {}",
        summary.repositories_processed
    );
    println!("  Succeeded: {}", summary.repositories_succeeded);
    println!("  Failed: {}", summary.repositories_failed);
    println!("  Suggestions generated: {}", summary.suggestions_generated);
}

fn print_suggestion(index: usize, suggestion: &IssueSuggestion) {
    println!("\n  {index}. [{}] {}", suggestion.kind, suggestion.title);
    if !suggestion.reasoning.is_empty() {
        println!("     Why: {}", suggestion.reasoning);
    }
    for line in suggestion.body.lines() {
        println!("     {line}");
    }
}
