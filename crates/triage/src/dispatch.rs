//! Per-event handlers and the run driver.
//!
//! [`plan`] decides, without side effects, which comments an event calls
//! for. [`run`] routes the event, plans it and posts the comments in order
//! through a [`CommentSink`], turning every error into a [`RunOutcome`].

use tracing::{debug, error, info, info_span, warn, Instrument};

use crate::commands::{extract_mention, parse_command, SlashCommand};
use crate::messages;
use crate::routing::{route, EventKind, Route, RouteError};
use crate::validation::{has_pr_description, validate_issue_body};
use crate::{
    AuthorAssociation, CommentSink, CommentTarget, EventContext, EventSource, EventSourceError,
    RunOutcome, TriageError,
};

/// How an issue with a matched template but missing sections is handled.
///
/// `Legacy` only considers the missing-sections comment inside the
/// no-template branch, where it can never apply, so it is never posted.
/// `Report` posts it whenever a matched template is incomplete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingSectionsPolicy {
    /// Comment when a matched template is incomplete.
    #[default]
    Report,
    /// Keep the nested check, which never posts the comment.
    Legacy,
}

/// The comments a handler wants posted, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub target: CommentTarget,
    pub comments: Vec<String>,
}

/// Computes the comments for a routed event.
///
/// Returns `Ok(None)` for routes that never comment.
pub fn plan(
    route: Route,
    ctx: &EventContext,
    policy: MissingSectionsPolicy,
) -> Result<Option<Plan>, TriageError> {
    match route {
        Route::IssueOpened => plan_issue(ctx, policy).map(Some),
        Route::IssueCommentCreated => plan_comment(ctx).map(Some),
        Route::PullRequestOpened => plan_pull_request(ctx).map(Some),
        Route::PullRequestReviewSubmitted => {
            debug!("Pull request reviews are accepted but not triaged");
            Ok(None)
        }
    }
}

fn plan_issue(ctx: &EventContext, policy: MissingSectionsPolicy) -> Result<Plan, TriageError> {
    let issue = ctx
        .payload
        .issue
        .as_ref()
        .ok_or(TriageError::MissingPayload { field: "issue" })?;
    let author = &issue.user.login;
    let outcome = validate_issue_body(issue.body.as_deref());

    info!(
        issue = %issue.number,
        template = outcome.matched.map(|t| t.name),
        has_required_sections = outcome.has_required_sections,
        missing = ?outcome.missing_sections,
        "Validated issue body"
    );

    let mut comments = Vec::new();
    match policy {
        MissingSectionsPolicy::Report => match outcome.matched {
            None => comments.push(messages::no_template_used(author)),
            Some(template) if !outcome.has_required_sections => {
                comments.push(messages::missing_template_sections(author, template));
            }
            Some(_) => {}
        },
        MissingSectionsPolicy::Legacy => {
            if outcome.matched.is_none() {
                comments.push(messages::no_template_used(author));
                if !outcome.has_required_sections {
                    let template = outcome
                        .matched
                        .ok_or(TriageError::MissingSectionsWithoutTemplate)?;
                    comments.push(messages::missing_template_sections(author, template));
                }
            }
        }
    }

    if issue.author_association.is_first_timer() {
        comments.push(messages::new_member(author));
    }

    Ok(Plan {
        target: CommentTarget {
            repository: ctx.repository.clone(),
            number: issue.number,
        },
        comments,
    })
}

fn plan_pull_request(ctx: &EventContext) -> Result<Plan, TriageError> {
    let pr = ctx
        .payload
        .pull_request
        .as_ref()
        .ok_or(TriageError::MissingPayload {
            field: "pull_request",
        })?;
    let author = &pr.user.login;

    let mut comments = Vec::new();
    if !has_pr_description(pr.body.as_deref()) {
        info!(pull_request = %pr.number, "Pull request has no description");
        comments.push(messages::no_pr_description(author));
    }
    if pr.author_association.is_first_timer() {
        comments.push(messages::new_member(author));
    }

    Ok(Plan {
        target: CommentTarget {
            repository: ctx.repository.clone(),
            number: pr.number,
        },
        comments,
    })
}

fn plan_comment(ctx: &EventContext) -> Result<Plan, TriageError> {
    let comment = ctx
        .payload
        .comment
        .as_ref()
        .ok_or(TriageError::MissingPayload { field: "comment" })?;
    let issue = ctx
        .payload
        .issue
        .as_ref()
        .ok_or(TriageError::MissingPayload { field: "issue" })?;
    let target = CommentTarget {
        repository: ctx.repository.clone(),
        number: issue.number,
    };

    if comment.author_association != AuthorAssociation::Member {
        debug!(
            commenter = %comment.user.login,
            association = ?comment.author_association,
            "Ignoring comment from non-member"
        );
        return Ok(Plan {
            target,
            comments: Vec::new(),
        });
    }

    let body = comment.body.as_deref().unwrap_or_default();
    let comments = match parse_command(body) {
        Some(SlashCommand::JsFiddle) => {
            info!(
                commenter = %comment.user.login,
                command = %SlashCommand::JsFiddle,
                "Running command"
            );
            vec![messages::jsfiddle(&comment.user.login, extract_mention(body))]
        }
        None => {
            debug!("Comment contains no known command");
            Vec::new()
        }
    };

    Ok(Plan { target, comments })
}

/// Handles one event end to end and reports how the run ended.
///
/// Comments are posted sequentially, each awaited before the next. The first
/// failed post ends the run as a failure; earlier comments stay posted.
pub async fn run(
    ctx: &EventContext,
    sink: &dyn CommentSink,
    policy: MissingSectionsPolicy,
) -> RunOutcome {
    let span = info_span!(
        "triage_run",
        run_id = %ctx.run_id,
        event = %ctx.event_name,
        action = %ctx.action(),
        repository = %ctx.repository,
    );

    async move {
        let route = match route(&ctx.event_name, ctx.action()) {
            Ok(route) => route,
            Err(err) => {
                let outcome = RunOutcome::from(err);
                match &outcome {
                    RunOutcome::Neutral { reason } => warn!(%reason, "Event not handled"),
                    RunOutcome::Failure { reason } => error!(%reason, "Event not handled"),
                    RunOutcome::Success => {}
                }
                return outcome;
            }
        };

        match execute(route, ctx, sink, policy).await {
            Ok(posted) => {
                info!(?route, posted, "Run complete");
                RunOutcome::Success
            }
            Err(err) => {
                error!(?route, error = %err, "Run failed");
                RunOutcome::failure(err.to_string())
            }
        }
    }
    .instrument(span)
    .await
}

/// Loads the event from `source` and handles it with [`run`].
///
/// Unsupported events end neutral on their name alone, before the payload is
/// read, so a payload this crate cannot parse never turns them into
/// failures. Errors loading a supported event are returned to the caller.
pub async fn run_from_source(
    source: &dyn EventSource,
    sink: &dyn CommentSink,
    policy: MissingSectionsPolicy,
) -> Result<RunOutcome, EventSourceError> {
    let event = source.event_name().unwrap_or_default();
    if EventKind::from_name(event).is_none() {
        return Ok(RunOutcome::from(RouteError::UnsupportedEvent {
            event: event.to_string(),
        }));
    }

    let ctx = source.receive().await?;
    Ok(run(&ctx, sink, policy).await)
}

async fn execute(
    route: Route,
    ctx: &EventContext,
    sink: &dyn CommentSink,
    policy: MissingSectionsPolicy,
) -> Result<usize, TriageError> {
    let Some(plan) = plan(route, ctx, policy)? else {
        return Ok(0);
    };

    for body in &plan.comments {
        sink.create_comment(&plan.target, body).await?;
    }
    Ok(plan.comments.len())
}
