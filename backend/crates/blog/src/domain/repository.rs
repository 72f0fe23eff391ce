//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{PostId, UserId};

use crate::domain::entities::{NewPost, Post, PostUpdate};
use crate::error::BlogResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Insert a new post and return the stored record with its
    /// database-assigned id. A unique-index violation on the title
    /// surfaces as `BlogError::DuplicateTitle`.
    async fn create(&self, post: &NewPost) -> BlogResult<Post>;

    /// Find post by ID
    async fn find_by_id(&self, post_id: PostId) -> BlogResult<Option<Post>>;

    /// All posts in insertion order, no pagination
    async fn list_all(&self) -> BlogResult<Vec<Post>>;

    /// Posts by a given author, in insertion order
    async fn find_by_author(&self, author_id: UserId) -> BlogResult<Vec<Post>>;

    /// Overwrite a post's fields, leaving id and date untouched.
    /// Returns `None` when the id is absent.
    async fn update(&self, post_id: PostId, update: &PostUpdate) -> BlogResult<Option<Post>>;

    /// Delete a post. Returns whether a row was removed.
    async fn delete(&self, post_id: PostId) -> BlogResult<bool>;
}
