//! Create Post Use Case
//!
//! Callers must already have passed the admin gate; this use case only
//! owns validation and the server-assigned creation date.

use std::sync::Arc;

use chrono::Utc;

use auth::models::User;

use crate::domain::entities::{NewPost, Post, PostDraft, long_form_date};
use crate::domain::repository::PostRepository;
use crate::error::BlogResult;

/// Create post use case
pub struct CreatePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> CreatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    /// Validate the draft and insert one post authored by `author`
    ///
    /// The date is stamped here as "today" in long form; callers never
    /// supply it.
    pub async fn execute(&self, draft: PostDraft, author: &User) -> BlogResult<Post> {
        let content = draft.validate()?;

        let new_post = NewPost {
            content,
            date: long_form_date(Utc::now().date_naive()),
            author_id: author.id,
        };

        let post = self.post_repo.create(&new_post).await?;

        tracing::info!(post_id = %post.id, author_id = %post.author_id, "Post created");

        Ok(post)
    }
}
