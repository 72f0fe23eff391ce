//! Update Post Use Case
//!
//! Overwrites every field except the identifier and the creation date.
//! The author reference only changes when explicitly supplied.

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::domain::entities::{Post, PostDraft, PostUpdate};
use crate::domain::repository::PostRepository;
use crate::error::{BlogError, BlogResult};

/// Update post use case
pub struct UpdatePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> UpdatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(
        &self,
        post_id: PostId,
        draft: PostDraft,
        author_id: Option<UserId>,
    ) -> BlogResult<Post> {
        let content = draft.validate()?;

        let update = PostUpdate { content, author_id };

        let post = self
            .post_repo
            .update(post_id, &update)
            .await?
            .ok_or(BlogError::PostNotFound)?;

        tracing::info!(post_id = %post.id, "Post updated");

        Ok(post)
    }
}
