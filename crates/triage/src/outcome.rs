//! How a run ends.
//!
//! The invoking platform distinguishes three results by exit code: the run
//! did its job, the run deliberately did nothing, or the run failed.

use crate::RouteError;

/// Exit code for a run that intentionally did nothing.
///
/// `78` is the neutral code understood by GitHub Actions tooling.
pub const NEUTRAL_EXIT_CODE: u8 = 78;

/// Exit code for a failed run.
pub const FAILURE_EXIT_CODE: u8 = 1;

/// Final status of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The event was handled (possibly without posting anything).
    Success,
    /// The event is not applicable to this bot.
    Neutral { reason: String },
    /// The run errored or was explicitly failed.
    Failure { reason: String },
}

impl RunOutcome {
    /// A failed run, exiting with [`FAILURE_EXIT_CODE`].
    pub fn failure(reason: impl Into<String>) -> Self {
        RunOutcome::Failure {
            reason: reason.into(),
        }
    }

    /// A run with nothing to do, exiting with [`NEUTRAL_EXIT_CODE`].
    pub fn neutral(reason: impl Into<String>) -> Self {
        RunOutcome::Neutral {
            reason: reason.into(),
        }
    }

    /// The process exit code for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunOutcome::Success => 0,
            RunOutcome::Neutral { .. } => NEUTRAL_EXIT_CODE,
            RunOutcome::Failure { .. } => FAILURE_EXIT_CODE,
        }
    }
}

impl From<RouteError> for RunOutcome {
    fn from(err: RouteError) -> Self {
        match err {
            RouteError::UnsupportedEvent { .. } => RunOutcome::neutral(err.to_string()),
            RouteError::UnsupportedAction { .. } => RunOutcome::failure(err.to_string()),
        }
    }
}
