//! Event router: maps a webhook event name and action to a handler route.
//!
//! Routing is a pure lookup. Unknown events and unknown actions are kept
//! apart because they end a run differently: an event the bot does not
//! subscribe to is a legitimate no-op, while an unhandled action of a
//! subscribed event is reported as a failure.

use thiserror::Error;

/// Webhook events the bot subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Issues,
    IssueComment,
    PullRequest,
    PullRequestReview,
}

impl EventKind {
    /// Every supported event.
    pub const ALL: &'static [EventKind] = &[
        EventKind::Issues,
        EventKind::IssueComment,
        EventKind::PullRequest,
        EventKind::PullRequestReview,
    ];

    /// The webhook event name, e.g. `issue_comment`.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Issues => "issues",
            EventKind::IssueComment => "issue_comment",
            EventKind::PullRequest => "pull_request",
            EventKind::PullRequestReview => "pull_request_review",
        }
    }

    /// Looks up a supported event by its webhook name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == name)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A handler selected by [`route`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `issues` / `opened`: validate the issue body against the templates.
    IssueOpened,
    /// `issue_comment` / `created`: run maintainer slash commands.
    IssueCommentCreated,
    /// `pull_request` / `opened`: check the description section.
    PullRequestOpened,
    /// `pull_request_review` / `submitted`: accepted, nothing to do.
    PullRequestReviewSubmitted,
}

/// Why an event could not be routed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The event is not one the bot subscribes to.
    #[error("Event '{event}' is not supported")]
    UnsupportedEvent { event: String },

    /// The event is supported but has no handler for this action.
    #[error("No event action handler for '{event}/{action}'")]
    UnsupportedAction { event: EventKind, action: String },
}

/// Selects the handler for `event` and `action`.
pub fn route(event: &str, action: &str) -> Result<Route, RouteError> {
    let kind = EventKind::from_name(event).ok_or_else(|| RouteError::UnsupportedEvent {
        event: event.to_string(),
    })?;

    match (kind, action) {
        (EventKind::Issues, "opened") => Ok(Route::IssueOpened),
        (EventKind::IssueComment, "created") => Ok(Route::IssueCommentCreated),
        (EventKind::PullRequest, "opened") => Ok(Route::PullRequestOpened),
        (EventKind::PullRequestReview, "submitted") => Ok(Route::PullRequestReviewSubmitted),
        (kind, action) => Err(RouteError::UnsupportedAction {
            event: kind,
            action: action.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_every_supported_pair() {
        assert_eq!(route("issues", "opened"), Ok(Route::IssueOpened));
        assert_eq!(route("issue_comment", "created"), Ok(Route::IssueCommentCreated));
        assert_eq!(route("pull_request", "opened"), Ok(Route::PullRequestOpened));
        assert_eq!(
            route("pull_request_review", "submitted"),
            Ok(Route::PullRequestReviewSubmitted)
        );
    }

    #[test]
    fn unknown_event_is_unsupported_event() {
        assert_eq!(
            route("deployment", "created"),
            Err(RouteError::UnsupportedEvent {
                event: "deployment".to_string()
            })
        );
    }

    #[test]
    fn unknown_action_is_unsupported_action() {
        let err = route("issues", "closed").unwrap_err();
        assert_eq!(
            err,
            RouteError::UnsupportedAction {
                event: EventKind::Issues,
                action: "closed".to_string()
            }
        );
        assert_eq!(err.to_string(), "No event action handler for 'issues/closed'");
    }

    #[test]
    fn empty_action_is_unsupported() {
        assert!(matches!(
            route("pull_request", ""),
            Err(RouteError::UnsupportedAction { .. })
        ));
    }

    #[test]
    fn event_names_round_trip() {
        for kind in EventKind::ALL {
            assert_eq!(EventKind::from_name(kind.as_str()), Some(*kind));
        }
        assert_eq!(EventKind::from_name("Issues"), None);
    }
}
