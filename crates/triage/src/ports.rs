//! Port traits implemented by infrastructure crates.
//!
//! The domain never talks to GitHub or the runner environment directly. It
//! receives an [`EventContext`] from an [`EventSource`] and hands rendered
//! comments to a [`CommentSink`].

use async_trait::async_trait;
use thiserror::Error;

use crate::{CommentTarget, EventContext};

// ---------------------------------------------------------------------------
// Comment sink
// ---------------------------------------------------------------------------

/// Failure to post a comment.
#[derive(Debug, Error)]
#[error("Failed to post comment on {target}: {message}")]
pub struct CommentSinkError {
    /// Rendered form of the issue or pull request the comment was meant for.
    pub target: String,
    /// Description of the failure reported by the sink.
    pub message: String,
    /// HTTP status returned by the platform, if the failure was an API error.
    pub status: Option<u16>,
}

/// Posts comments on issues and pull requests.
#[async_trait]
pub trait CommentSink: Send + Sync {
    /// Creates a comment with `body` on `target`.
    ///
    /// Errors are returned to the caller unchanged; implementations must not
    /// retry.
    async fn create_comment(
        &self,
        target: &CommentTarget,
        body: &str,
    ) -> Result<(), CommentSinkError>;
}

// ---------------------------------------------------------------------------
// Event source
// ---------------------------------------------------------------------------

/// Failure to obtain the triggering event.
#[derive(Debug, Error)]
pub enum EventSourceError {
    /// A required runtime variable was not provided.
    #[error("Required runtime variable '{name}' is not set")]
    MissingVariable { name: &'static str },

    /// The event payload file could not be read.
    #[error("Failed to read event payload '{path}': {message}")]
    Read { path: String, message: String },

    /// The event payload could not be deserialised.
    #[error("Failed to parse event payload")]
    Parse(#[from] serde_json::Error),

    /// Neither the payload nor the runtime named a usable repository.
    #[error("Invalid repository '{value}', expected 'owner/name'")]
    InvalidRepository { value: String },
}

/// Supplies the single event a run handles.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// The webhook event name, available without reading the payload.
    fn event_name(&self) -> Option<&str>;

    /// Loads the event that triggered this run.
    async fn receive(&self) -> Result<EventContext, EventSourceError>;
}
