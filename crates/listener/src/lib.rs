//! Issue triage trigger event source.
//!
//! Implements the [`triage::EventSource`] trait for the GitHub Actions
//! runtime: the runner names the event in `GITHUB_EVENT_NAME`, writes the
//! webhook payload to the file named by `GITHUB_EVENT_PATH` and identifies
//! the repository in `GITHUB_REPOSITORY`.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** File access and payload deserialisation live here.
//! The [`triage`] crate sees only [`triage::EventSource`] and
//! [`triage::EventContext`].
//!
//! Values are passed in through [`ActionsEventSourceConfig`] rather than read
//! from the process environment, so the composition root decides where they
//! come from.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use triage::{
    EventContext, EventSource, EventSourceError, RepositoryRef, RunId, WebhookPayload,
};

/// Variables every Actions runner sets. Missing ones suggest the bot is
/// running outside a runner.
pub const RUNNER_VARIABLES: &[&str] = &[
    "HOME",
    "GITHUB_WORKFLOW",
    "GITHUB_ACTION",
    "GITHUB_ACTOR",
    "GITHUB_REPOSITORY",
    "GITHUB_EVENT_NAME",
    "GITHUB_EVENT_PATH",
    "GITHUB_WORKSPACE",
    "GITHUB_SHA",
];

/// Returns the [`RUNNER_VARIABLES`] for which `is_set` is `false`.
pub fn missing_runner_variables(is_set: impl Fn(&str) -> bool) -> Vec<&'static str> {
    RUNNER_VARIABLES
        .iter()
        .copied()
        .filter(|name| !is_set(name))
        .collect()
}

/// Logs one warning listing runner variables absent from the process
/// environment. Absence is not fatal on its own.
pub fn warn_for_missing_runner_variables() {
    let missing = missing_runner_variables(|name| std::env::var_os(name).is_some());
    if !missing.is_empty() {
        warn!(
            missing = ?missing,
            "Environment variables that GitHub Actions would set are missing from this runtime"
        );
    }
}

/// Where to find the triggering event.
#[derive(Debug, Clone, Default)]
pub struct ActionsEventSourceConfig {
    /// Value of `GITHUB_EVENT_NAME`.
    pub event_name: Option<String>,
    /// Value of `GITHUB_EVENT_PATH`.
    pub event_path: Option<PathBuf>,
    /// Value of `GITHUB_REPOSITORY` (`owner/name`). Used when the payload
    /// carries no `repository` object.
    pub repository: Option<String>,
}

/// Loads the single event of an Actions run.
#[derive(Debug, Clone)]
pub struct ActionsEventSource {
    config: ActionsEventSourceConfig,
}

impl ActionsEventSource {
    /// Creates a source that reads the event described by `config`.
    pub fn new(config: ActionsEventSourceConfig) -> Self {
        Self { config }
    }

    fn resolve_repository(
        &self,
        payload: &WebhookPayload,
    ) -> Result<RepositoryRef, EventSourceError> {
        if let Some(repo) = &payload.repository {
            return Ok(RepositoryRef {
                owner: repo.owner.login.clone(),
                name: repo.name.clone(),
            });
        }

        let full_name = self
            .config
            .repository
            .as_deref()
            .ok_or(EventSourceError::MissingVariable {
                name: "GITHUB_REPOSITORY",
            })?;
        RepositoryRef::parse(full_name).ok_or_else(|| EventSourceError::InvalidRepository {
            value: full_name.to_string(),
        })
    }
}

#[async_trait]
impl EventSource for ActionsEventSource {
    fn event_name(&self) -> Option<&str> {
        self.config.event_name.as_deref()
    }

    async fn receive(&self) -> Result<EventContext, EventSourceError> {
        let event_name = self
            .config
            .event_name
            .clone()
            .filter(|name| !name.is_empty())
            .ok_or(EventSourceError::MissingVariable {
                name: "GITHUB_EVENT_NAME",
            })?;
        let event_path =
            self.config
                .event_path
                .as_ref()
                .ok_or(EventSourceError::MissingVariable {
                    name: "GITHUB_EVENT_PATH",
                })?;

        let raw = tokio::fs::read(event_path)
            .await
            .map_err(|err| EventSourceError::Read {
                path: event_path.display().to_string(),
                message: err.to_string(),
            })?;
        let payload: WebhookPayload = serde_json::from_slice(&raw)?;
        let repository = self.resolve_repository(&payload)?;

        let ctx = EventContext {
            run_id: RunId::new_random(),
            event_name,
            payload,
            repository,
        };

        info!(
            run_id = %ctx.run_id,
            event = %ctx.event_name,
            action = %ctx.action(),
            repository = %ctx.repository,
            sender = ctx.payload.sender.as_ref().map(|s| s.login.as_str()),
            "Received event"
        );
        debug!(
            context = %serde_json::to_string(&ctx).unwrap_or_default(),
            "Event context"
        );

        Ok(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_only_unset_runner_variables() {
        let missing =
            missing_runner_variables(|name| name != "GITHUB_SHA" && name != "GITHUB_ACTOR");
        assert_eq!(missing, vec!["GITHUB_ACTOR", "GITHUB_SHA"]);

        assert!(missing_runner_variables(|_| true).is_empty());
        assert_eq!(missing_runner_variables(|_| false).len(), RUNNER_VARIABLES.len());
    }
}
