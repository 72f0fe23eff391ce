//! Get Post Use Case

use std::sync::Arc;

use kernel::id::PostId;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::error::BlogResult;

/// Get post use case
pub struct GetPostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> GetPostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    /// Fetch a post by id; `None` when absent. Routes translate the
    /// missing case into an explicit 404 rather than dereferencing it.
    pub async fn execute(&self, post_id: PostId) -> BlogResult<Option<Post>> {
        self.post_repo.find_by_id(post_id).await
    }
}
