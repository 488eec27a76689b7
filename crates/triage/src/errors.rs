//! Top-level error type for a triage run.
//!
//! [`TriageError`] covers conditions that abort the handling of an event.
//! Component-level errors ([`crate::RouteError`], [`crate::CommentSinkError`],
//! [`crate::EventSourceError`]) are defined next to the component that
//! produces them.

use thiserror::Error;

use crate::CommentSinkError;

/// Errors that abort handling of a routed event.
///
/// Every variant ends the run with a failure outcome. There is no partial
/// retry: a run either posts all of its comments or fails.
#[derive(Debug, Error)]
pub enum TriageError {
    /// The payload lacks the object the selected handler reads.
    ///
    /// Produced when, for example, an `issues` event arrives without an
    /// `issue` object.
    #[error("Event payload is missing '{field}'")]
    MissingPayload {
        /// Name of the payload field that was expected.
        field: &'static str,
    },

    /// The legacy section check tried to describe missing sections while no
    /// template had been matched.
    ///
    /// Only reachable under [`crate::MissingSectionsPolicy::Legacy`].
    #[error("Missing template sections reported without a matched template")]
    MissingSectionsWithoutTemplate,

    /// Posting a comment failed.
    #[error(transparent)]
    CommentSink(#[from] CommentSinkError),
}
