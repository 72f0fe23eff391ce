//! Domain Entities

use chrono::NaiveDate;
use kernel::id::{PostId, UserId};

use crate::domain::value_objects::{ImageUrl, PostTitle};
use crate::error::{BlogError, BlogResult};

/// Blog post entity
///
/// The creation date is a human-readable string stamped once when the
/// post is created and never touched on update.
#[derive(Debug, Clone)]
pub struct Post {
    /// Database-assigned identifier
    pub id: PostId,
    /// Title (unique across all posts)
    pub title: PostTitle,
    pub subtitle: String,
    /// Rich-text body, passed through verbatim
    pub body: String,
    /// Cover image URL
    pub img_url: ImageUrl,
    /// Creation date, e.g. "January 1, 2024"
    pub date: String,
    /// The authoring user; resolved via an explicit repository query,
    /// not an object graph
    pub author_id: UserId,
}

/// Validated post content shared by create and update
#[derive(Debug, Clone)]
pub struct PostContent {
    pub title: PostTitle,
    pub subtitle: String,
    pub body: String,
    pub img_url: ImageUrl,
}

/// Unvalidated form fields for a post
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub img_url: String,
}

impl PostDraft {
    /// Validate every field, collecting the names of the ones that fail
    pub fn validate(self) -> BlogResult<PostContent> {
        let mut fields = Vec::new();

        let title = PostTitle::new(self.title).ok();
        if title.is_none() {
            fields.push("title".to_string());
        }

        let subtitle = self.subtitle.trim().to_string();
        if subtitle.is_empty() {
            fields.push("subtitle".to_string());
        }

        let body = self.body.trim().to_string();
        if body.is_empty() {
            fields.push("body".to_string());
        }

        let img_url = ImageUrl::new(self.img_url).ok();
        if img_url.is_none() {
            fields.push("img_url".to_string());
        }

        match (title, img_url) {
            (Some(title), Some(img_url)) if fields.is_empty() => Ok(PostContent {
                title,
                subtitle,
                body,
                img_url,
            }),
            _ => Err(BlogError::Validation { fields }),
        }
    }
}

/// A post about to be inserted (no id yet)
#[derive(Debug, Clone)]
pub struct NewPost {
    pub content: PostContent,
    pub date: String,
    pub author_id: UserId,
}

/// Fields applied by an update
///
/// `author_id` only replaces the stored author when explicitly supplied.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub content: PostContent,
    pub author_id: Option<UserId>,
}

/// Format a date the way post headers show it: "January 1, 2024"
pub fn long_form_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_form_date() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(long_form_date(d), "January 1, 2024");

        let d = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        assert_eq!(long_form_date(d), "December 25, 2023");
    }

    #[test]
    fn test_draft_validation_collects_all_failures() {
        let draft = PostDraft {
            title: "".to_string(),
            subtitle: "  ".to_string(),
            body: "content".to_string(),
            img_url: "not-a-url".to_string(),
        };

        match draft.validate() {
            Err(BlogError::Validation { fields }) => {
                assert_eq!(fields, vec!["title", "subtitle", "img_url"]);
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_draft_validation_passes() {
        let draft = PostDraft {
            title: "Hello".to_string(),
            subtitle: "World".to_string(),
            body: "...".to_string(),
            img_url: "http://x.com/a.png".to_string(),
        };

        let content = draft.validate().unwrap();
        assert_eq!(content.title.as_str(), "Hello");
        assert_eq!(content.subtitle, "World");
        assert_eq!(content.img_url.as_str(), "http://x.com/a.png");
    }
}
