//! Event payload and context types.
//!
//! These mirror the subset of the GitHub webhook payload the triage handlers
//! read. Everything the bot does not look at is ignored during
//! deserialisation, so payload additions on the platform side never break a
//! run.

use serde::{Deserialize, Serialize};

use crate::{IssueNumber, RepositoryName, RepositoryOwner, RunId, UserLogin};

// ---------------------------------------------------------------------------
// Author association
// ---------------------------------------------------------------------------

/// Relationship of a user to the repository, as reported by GitHub.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorAssociation {
    /// Owns the repository.
    Owner,
    /// Member of the organisation that owns the repository.
    Member,
    /// Invited to collaborate on the repository.
    Collaborator,
    /// Has previously committed to the repository.
    Contributor,
    /// Has not contributed to this repository before.
    FirstTimeContributor,
    /// Has never contributed to any repository on GitHub.
    FirstTimer,
    /// Placeholder for an account created by an import.
    Mannequin,
    /// No association with the repository.
    #[default]
    None,
    /// Any value GitHub introduces after this list was written.
    #[serde(other)]
    Unknown,
}

impl AuthorAssociation {
    /// Returns `true` for authors who have never contributed to the repository.
    pub fn is_first_timer(self) -> bool {
        matches!(
            self,
            AuthorAssociation::FirstTimeContributor | AuthorAssociation::FirstTimer
        )
    }
}

// ---------------------------------------------------------------------------
// Payload objects
// ---------------------------------------------------------------------------

/// The author of an issue, pull request or comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub login: UserLogin,
}

/// The account that triggered the event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sender {
    pub login: UserLogin,
    /// `"User"`, `"Bot"` or `"Organization"`.
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// The `issue` object of `issues` and `issue_comment` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub number: IssueNumber,
    #[serde(default)]
    pub body: Option<String>,
    pub user: User,
    #[serde(default)]
    pub author_association: AuthorAssociation,
}

/// The `pull_request` object of pull request events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: IssueNumber,
    #[serde(default)]
    pub body: Option<String>,
    pub user: User,
    #[serde(default)]
    pub author_association: AuthorAssociation,
}

/// The `comment` object of `issue_comment` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub body: Option<String>,
    pub user: User,
    #[serde(default)]
    pub author_association: AuthorAssociation,
}

/// The `owner` object nested in a repository payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryOwnerRef {
    pub login: RepositoryOwner,
}

/// The `repository` object delivered with every event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryPayload {
    pub name: RepositoryName,
    pub owner: RepositoryOwnerRef,
}

/// The webhook payload delivered with an event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub issue: Option<Issue>,
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
    #[serde(default)]
    pub comment: Option<Comment>,
    #[serde(default)]
    pub sender: Option<Sender>,
    #[serde(default)]
    pub repository: Option<RepositoryPayload>,
}

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// A repository addressed as `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryRef {
    pub owner: RepositoryOwner,
    pub name: RepositoryName,
}

impl RepositoryRef {
    /// Parses the `owner/name` form used by `GITHUB_REPOSITORY`.
    ///
    /// Returns `None` unless both halves are present and non-empty.
    pub fn parse(full_name: &str) -> Option<Self> {
        let (owner, name) = full_name.split_once('/')?;
        if name.contains('/') {
            return None;
        }
        Some(Self {
            owner: RepositoryOwner::new(owner)?,
            name: RepositoryName::new(name)?,
        })
    }
}

impl std::fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Everything a handler may read about the event that triggered this run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventContext {
    pub run_id: RunId,
    /// Webhook event name, e.g. `issues` or `pull_request`.
    pub event_name: String,
    pub payload: WebhookPayload,
    pub repository: RepositoryRef,
}

impl EventContext {
    /// The payload's `action`, or the empty string when the event has none.
    pub fn action(&self) -> &str {
        self.payload.action.as_deref().unwrap_or_default()
    }
}

/// Where a comment is posted: an issue or pull request in a repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CommentTarget {
    pub repository: RepositoryRef,
    pub number: IssueNumber,
}

impl std::fmt::Display for CommentTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.repository, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn association_parses_platform_values() {
        let parsed: AuthorAssociation =
            serde_json::from_str("\"FIRST_TIME_CONTRIBUTOR\"").unwrap();
        assert_eq!(parsed, AuthorAssociation::FirstTimeContributor);
        assert!(parsed.is_first_timer());

        let parsed: AuthorAssociation = serde_json::from_str("\"MEMBER\"").unwrap();
        assert!(!parsed.is_first_timer());

        let parsed: AuthorAssociation = serde_json::from_str("\"SPONSOR\"").unwrap();
        assert_eq!(parsed, AuthorAssociation::Unknown);
    }

    #[test]
    fn repository_ref_parses_owner_and_name() {
        let repo = RepositoryRef::parse("fomantic/Fomantic-UI").unwrap();
        assert_eq!(repo.owner.as_str(), "fomantic");
        assert_eq!(repo.name.as_str(), "Fomantic-UI");
        assert_eq!(repo.to_string(), "fomantic/Fomantic-UI");

        assert!(RepositoryRef::parse("no-slash").is_none());
        assert!(RepositoryRef::parse("/name").is_none());
        assert!(RepositoryRef::parse("a/b/c").is_none());
    }

    #[test]
    fn payload_tolerates_missing_and_null_bodies() {
        let payload: WebhookPayload = serde_json::from_value(serde_json::json!({
            "action": "opened",
            "issue": {
                "number": 7,
                "body": null,
                "user": { "login": "octocat" },
                "author_association": "NONE"
            },
            "sender": { "login": "octocat", "type": "User" },
            "unrelated": { "field": true }
        }))
        .unwrap();

        let issue = payload.issue.unwrap();
        assert_eq!(issue.number.as_u64(), 7);
        assert!(issue.body.is_none());
        assert_eq!(payload.sender.unwrap().kind, "User");
    }
}
