//! Submit Comment Use Case
//!
//! The post-detail page exposes a comment form, but the observed system
//! never persisted comments: submission only triggers an authentication
//! check. That gap is reproduced here deliberately - there is no
//! comments table and no storage semantics to invent. Accepted
//! submissions are acknowledged and dropped.

use std::sync::Arc;

use auth::models::User;
use kernel::id::PostId;

use crate::domain::repository::PostRepository;
use crate::error::{BlogError, BlogResult};

/// Submit comment use case
pub struct SubmitCommentUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> SubmitCommentUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    /// Require an authenticated identity, then intentionally do nothing
    pub async fn execute(
        &self,
        identity: Option<&User>,
        post_id: PostId,
        text: &str,
    ) -> BlogResult<()> {
        let user = identity.ok_or(BlogError::Unauthenticated)?;

        if self.post_repo.find_by_id(post_id).await?.is_none() {
            return Err(BlogError::PostNotFound);
        }

        tracing::debug!(
            post_id = %post_id,
            user_id = %user.id,
            chars = text.chars().count(),
            "Comment accepted but not persisted (known gap)"
        );

        Ok(())
    }
}
