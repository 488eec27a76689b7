//! Issue triage CLI entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Parse configuration**: flags with environment fallbacks, see
//!    [`config::Cli`].
//! 2. **Wire observability**: `tracing-subscriber` with a pretty or JSON fmt
//!    layer and an optional OpenTelemetry OTLP exporter.
//! 3. **Check required secrets** before any event is read. Unsupported
//!    events then end neutral on their name alone, before the payload is
//!    loaded.
//! 4. **Construct infrastructure**: the Actions event source and a comment
//!    sink (`GithubClient`, or the dry-run sink), each built once and passed
//!    by reference.
//! 5. **Run once and exit** with `0` (handled), `78` (neutral, nothing to do)
//!    or `1` (failure).

mod config;
mod dry_run;
mod observability;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};

use github::GithubClient;
use listener::ActionsEventSource;
use triage::{CommentSink, RunOutcome, FAILURE_EXIT_CODE};

use crate::config::{parse_error_exit_code, Cli, TriageConfig};
use crate::dry_run::DryRunSink;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(parse_error_exit_code(err.kind()));
        }
    };

    let telemetry = match observability::init(cli.log_format) {
        Ok(telemetry) => telemetry,
        Err(err) => {
            eprintln!("Failed to initialise logging: {err:#}");
            return ExitCode::from(FAILURE_EXIT_CODE);
        }
    };

    let outcome = match execute(cli).await {
        Ok(outcome) => outcome,
        Err(err) => RunOutcome::failure(format!("{err:#}")),
    };

    match &outcome {
        RunOutcome::Success => info!("Run succeeded"),
        RunOutcome::Neutral { reason } => warn!(%reason, "Run ended with neutral status"),
        RunOutcome::Failure { reason } => error!(%reason, "Run failed"),
    }

    telemetry.shutdown();
    ExitCode::from(outcome.exit_code())
}

async fn execute(cli: Cli) -> Result<RunOutcome> {
    info!(version = env!("CARGO_PKG_VERSION"), "Starting issue triage");
    listener::warn_for_missing_runner_variables();

    let config = TriageConfig::from_cli(cli)?;

    let source = ActionsEventSource::new(config.event_source);
    let sink: Box<dyn CommentSink> = if config.dry_run {
        Box::new(DryRunSink)
    } else {
        Box::new(
            GithubClient::with_api_url(config.api_url, config.github_token)
                .context("Failed to build the GitHub client")?,
        )
    };

    triage::run_from_source(&source, sink.as_ref(), config.missing_sections)
        .await
        .context("Failed to load the triggering event")
}
