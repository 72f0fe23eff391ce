//! API DTOs (Data Transfer Objects)
//!
//! Form payloads arrive as standard HTML form submissions; page DTOs are
//! the view-models a template layer renders.

use serde::{Deserialize, Serialize};

use auth::models::IdentityView;

use crate::domain::entities::Post;

// ============================================================================
// Forms
// ============================================================================

/// Create / edit post form submission
#[derive(Debug, Clone, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub img_url: String,
    /// Only honored on edit: replaces the stored author when supplied
    pub author_id: Option<i64>,
}

/// Comment form submission on the post-detail page
#[derive(Debug, Clone, Deserialize)]
pub struct CommentForm {
    pub comment_text: String,
}

// ============================================================================
// View models
// ============================================================================

/// A single post as every view sees it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub img_url: String,
    pub date: String,
    pub author_id: i64,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.value(),
            title: post.title.as_str().to_string(),
            subtitle: post.subtitle.clone(),
            body: post.body.clone(),
            img_url: post.img_url.as_str().to_string(),
            date: post.date.clone(),
            author_id: post.author_id.value(),
        }
    }
}

/// Home page: every post, insertion order
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListView {
    pub identity: IdentityView,
    pub flash: Option<String>,
    pub posts: Vec<PostView>,
}

/// Post-detail page (carries the comment form)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailView {
    pub identity: IdentityView,
    pub flash: Option<String>,
    pub post: PostView,
}

/// New-post / edit-post form page; `post` is filled on edit
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFormView {
    pub identity: IdentityView,
    pub flash: Option<String>,
    pub post: Option<PostView>,
}

/// Static informational page (about, contact)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticPageView {
    pub identity: IdentityView,
    pub page: String,
}
