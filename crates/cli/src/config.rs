//! Command line and environment configuration.
//!
//! Every option can be given as a flag or through the environment variable
//! an Actions runner (or the workflow file) provides. Options are validated
//! once, in [`TriageConfig::from_cli`], before any event is read.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};

use listener::ActionsEventSourceConfig;
use triage::{MissingSectionsPolicy, FAILURE_EXIT_CODE};

/// Secrets that must be present for a run to start.
pub const REQUIRED_SECRETS: &[&str] = &["GITHUB_TOKEN"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Pretty,
    /// One JSON object per event.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MissingSections {
    /// Comment when a matched template lacks required sections.
    Report,
    /// Only ever comment about missing sections when no template matched,
    /// which in practice never happens.
    Legacy,
}

impl From<MissingSections> for MissingSectionsPolicy {
    fn from(value: MissingSections) -> Self {
        match value {
            MissingSections::Report => MissingSectionsPolicy::Report,
            MissingSections::Legacy => MissingSectionsPolicy::Legacy,
        }
    }
}

/// Triage a GitHub issue, pull request or comment against the project's templates.
#[derive(Debug, Clone, Parser)]
#[command(name = "issue-triage", version, about)]
pub struct Cli {
    /// Token used to post comments.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Webhook event name, e.g. `issues`.
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    pub event_name: Option<String>,

    /// Path of the JSON webhook payload.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Repository in `owner/name` form, used when the payload names none.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Base URL of the GitHub REST API.
    #[arg(long, env = "GITHUB_API_URL", default_value = github::DEFAULT_API_URL)]
    pub api_url: String,

    /// How issues with incomplete templates are handled.
    #[arg(long, env = "TRIAGE_MISSING_SECTIONS", value_enum, default_value_t = MissingSections::Report)]
    pub missing_sections: MissingSections,

    /// Log output format.
    #[arg(long, env = "TRIAGE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Log the comments that would be posted instead of posting them.
    #[arg(long)]
    pub dry_run: bool,
}

/// Validated run configuration.
#[derive(Debug, Clone)]
pub struct TriageConfig {
    pub github_token: String,
    pub api_url: String,
    pub event_source: ActionsEventSourceConfig,
    pub missing_sections: MissingSectionsPolicy,
    pub dry_run: bool,
}

impl TriageConfig {
    /// Checks required secrets and assembles the run configuration.
    ///
    /// Fails, naming every missing secret, when a required secret is absent
    /// or empty.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let github_token = cli.github_token.filter(|t| !t.trim().is_empty());

        let Some(github_token) = github_token else {
            let list = REQUIRED_SECRETS
                .iter()
                .map(|name| format!("- {name}"))
                .collect::<Vec<_>>()
                .join("\n");
            bail!("The following secrets are required for this run:\n{list}");
        };

        Ok(Self {
            github_token,
            api_url: cli.api_url,
            event_source: ActionsEventSourceConfig {
                event_name: cli.event_name,
                event_path: cli.event_path,
                repository: cli.repository,
            },
            missing_sections: cli.missing_sections.into(),
            dry_run: cli.dry_run,
        })
    }
}

/// Exit code for a command line that did not parse into a [`Cli`].
///
/// `--help` and `--version` succeed; anything else is a run failure rather
/// than clap's usage code.
pub fn parse_error_exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => FAILURE_EXIT_CODE,
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn cli() -> Cli {
        Cli {
            github_token: Some("ghs_token".to_string()),
            event_name: Some("issues".to_string()),
            event_path: Some(PathBuf::from("/github/workflow/event.json")),
            repository: Some("fomantic/Fomantic-UI".to_string()),
            api_url: github::DEFAULT_API_URL.to_string(),
            missing_sections: MissingSections::Report,
            log_format: LogFormat::Pretty,
            dry_run: false,
        }
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_defaults() {
        let parsed = Cli::try_parse_from([
            "issue-triage",
            "--github-token",
            "abc",
            "--missing-sections",
            "legacy",
            "--log-format",
            "json",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(parsed.github_token.as_deref(), Some("abc"));
        assert_eq!(parsed.missing_sections, MissingSections::Legacy);
        assert_eq!(parsed.log_format, LogFormat::Json);
        assert!(parsed.dry_run);
    }

    #[test]
    fn config_carries_event_source_values() {
        let config = TriageConfig::from_cli(cli()).unwrap();

        assert_eq!(config.github_token, "ghs_token");
        assert_eq!(config.event_source.event_name.as_deref(), Some("issues"));
        assert_eq!(
            config.event_source.repository.as_deref(),
            Some("fomantic/Fomantic-UI")
        );
        assert_eq!(config.missing_sections, MissingSectionsPolicy::Report);
    }

    #[test]
    fn missing_token_names_the_secret() {
        let err = TriageConfig::from_cli(Cli {
            github_token: None,
            ..cli()
        })
        .unwrap_err();
        assert!(err.to_string().contains("- GITHUB_TOKEN"));

        let err = TriageConfig::from_cli(Cli {
            github_token: Some("   ".to_string()),
            ..cli()
        })
        .unwrap_err();
        assert!(err.to_string().contains("- GITHUB_TOKEN"));
    }

    #[test]
    fn invalid_flag_value_exits_with_failure() {
        let err = Cli::try_parse_from(["issue-triage", "--log-format", "xml"]).unwrap_err();
        assert_eq!(parse_error_exit_code(err.kind()), FAILURE_EXIT_CODE);
    }

    #[test]
    fn help_and_version_exit_cleanly() {
        let err = Cli::try_parse_from(["issue-triage", "--help"]).unwrap_err();
        assert_eq!(parse_error_exit_code(err.kind()), 0);

        let err = Cli::try_parse_from(["issue-triage", "--version"]).unwrap_err();
        assert_eq!(parse_error_exit_code(err.kind()), 0);
    }
}
