//! Issue triage GitHub infrastructure adapter.
//!
//! Implements the [`triage::CommentSink`] port with a small REST client for
//! the "create an issue comment" endpoint. Issues and pull requests share
//! that endpoint, so one call covers both.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain triage rules. HTTP,
//! authentication headers and API error decoding live here; the [`triage`]
//! crate only sees [`triage::CommentSinkError`].
//!
//! Calls are made once. There is no retry or back-off: a failed post fails
//! the run.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use triage::{CommentSink, CommentSinkError, CommentTarget, IssueNumber, RepositoryRef};

/// Base URL of the public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("issue-triage/", env!("CARGO_PKG_VERSION"));

/// Errors returned by [`GithubClient`].
#[derive(Debug, Error)]
pub enum GithubError {
    /// The request could not be sent or its response could not be read.
    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// GitHub answered with a non-success status.
    #[error("GitHub API error: {status} - {body}")]
    Api { status: u16, body: String },
}

impl GithubError {
    /// The HTTP status GitHub returned, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            GithubError::Http(err) => err.status().map(|s| s.as_u16()),
            GithubError::Api { status, .. } => Some(*status),
        }
    }
}

#[derive(Serialize)]
struct CreateCommentRequest<'a> {
    body: &'a str,
}

/// A comment as returned by GitHub after creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedComment {
    pub id: u64,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Authenticated client for the GitHub REST API.
///
/// Constructed once at start-up and passed to whatever needs it.
pub struct GithubClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
}

impl std::fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubClient")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl GithubClient {
    /// Creates a client for the public GitHub API.
    pub fn new(token: impl Into<String>) -> Result<Self, GithubError> {
        Self::with_api_url(DEFAULT_API_URL, token)
    }

    /// Creates a client for a specific API base URL (GitHub Enterprise, or a
    /// mock server in tests).
    pub fn with_api_url(
        api_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, GithubError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// The API base URL this client talks to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Posts `body` as a new comment on issue or pull request `number`.
    pub async fn create_issue_comment(
        &self,
        repository: &RepositoryRef,
        number: IssueNumber,
        body: &str,
    ) -> Result<CreatedComment, GithubError> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.api_url, repository.owner, repository.name, number
        );

        info!(%repository, %number, "Posting comment");

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/vnd.github+json")
            .header(API_VERSION_HEADER, API_VERSION)
            .json(&CreateCommentRequest { body })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            error!(status = status.as_u16(), %body, "GitHub API error");
            return Err(GithubError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let comment: CreatedComment = response.json().await?;
        info!(comment_id = comment.id, "Comment posted");
        Ok(comment)
    }
}

#[async_trait]
impl CommentSink for GithubClient {
    async fn create_comment(
        &self,
        target: &CommentTarget,
        body: &str,
    ) -> Result<(), CommentSinkError> {
        self.create_issue_comment(&target.repository, target.number, body)
            .await
            .map(|_| ())
            .map_err(|err| CommentSinkError {
                target: target.to_string(),
                status: err.status(),
                message: err.to_string(),
            })
    }
}
