//! Issue and pull request triage domain.
//!
//! This crate decides what the triage bot says about an event: which issue
//! template a body uses, whether required sections are present, whether a
//! pull request is described, which maintainer commands a comment carries,
//! and how the run ends. Infrastructure crates implement the ports defined
//! here; they never add triage rules.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It defines *what* is needed; infrastructure crates define *how* to supply it.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`IssueNumber`, `UserLogin`, `RunId`, etc.) |
//! | [`types`] | Webhook payload objects and the per-run `EventContext` |
//! | [`templates`] | The ordered issue template registry |
//! | [`validation`] | Issue and pull request body validators |
//! | [`messages`] | Canned comment bodies |
//! | [`commands`] | Maintainer slash commands |
//! | [`routing`] | Event name + action to handler route |
//! | [`dispatch`] | Handlers and the run driver |
//! | [`outcome`] | Run outcomes and exit codes |
//! | [`ports`] | `CommentSink` and `EventSource` traits |
//! | [`errors`] | Top-level error type |

pub mod commands;
pub mod dispatch;
pub mod errors;
pub mod identifiers;
pub mod messages;
pub mod outcome;
pub mod ports;
pub mod routing;
pub mod templates;
pub mod types;
pub mod validation;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use commands::SlashCommand;
pub use dispatch::{plan, run, run_from_source, MissingSectionsPolicy, Plan};
pub use errors::TriageError;
pub use identifiers::{IssueNumber, RepositoryName, RepositoryOwner, RunId, UserLogin};
pub use outcome::{RunOutcome, FAILURE_EXIT_CODE, NEUTRAL_EXIT_CODE};
pub use ports::{CommentSink, CommentSinkError, EventSource, EventSourceError};
pub use routing::{route, EventKind, Route, RouteError};
pub use templates::{Template, TemplateKind, ISSUE_TEMPLATES};
pub use types::{
    AuthorAssociation, Comment, CommentTarget, EventContext, Issue, PullRequest,
    RepositoryPayload, RepositoryRef, Sender, User, WebhookPayload,
};
pub use validation::ValidationOutcome;
