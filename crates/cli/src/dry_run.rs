use async_trait::async_trait;
use tracing::info;

use triage::{CommentSink, CommentSinkError, CommentTarget};

/// A [`CommentSink`] that logs comments instead of posting them.
#[derive(Debug, Default)]
pub struct DryRunSink;

#[async_trait]
impl CommentSink for DryRunSink {
    async fn create_comment(
        &self,
        target: &CommentTarget,
        body: &str,
    ) -> Result<(), CommentSinkError> {
        info!(%target, %body, "Dry run: comment not posted");
        Ok(())
    }
}
