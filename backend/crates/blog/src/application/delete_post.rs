//! Delete Post Use Case

use std::sync::Arc;

use kernel::id::PostId;

use crate::domain::repository::PostRepository;
use crate::error::{BlogError, BlogResult};

/// Delete post use case
pub struct DeletePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> DeletePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, post_id: PostId) -> BlogResult<()> {
        if !self.post_repo.delete(post_id).await? {
            return Err(BlogError::PostNotFound);
        }

        tracing::info!(post_id = %post_id, "Post deleted");

        Ok(())
    }
}
