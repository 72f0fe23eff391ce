//! Domain Value Objects

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum post title length (in characters)
pub const POST_TITLE_MAX_LENGTH: usize = 250;

/// Maximum cover-image URL length
pub const IMAGE_URL_MAX_LENGTH: usize = 250;

// ============================================================================
// Post Title
// ============================================================================

/// Post title value object (unique across all posts)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostTitle(String);

impl PostTitle {
    /// Create a new title with validation
    pub fn new(title: impl Into<String>) -> AppResult<Self> {
        let title = title.into().trim().to_string();

        if title.is_empty() {
            return Err(AppError::bad_request("Title cannot be empty"));
        }

        if title.chars().count() > POST_TITLE_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Title must be at most {} characters",
                POST_TITLE_MAX_LENGTH
            )));
        }

        Ok(Self(title))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// Get the title as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Image URL
// ============================================================================

/// Cover-image URL value object
///
/// Must be an absolute http/https URL with a host. Hand validation in
/// the same spirit as the email format check: enough structure to catch
/// junk, no full RFC parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Create a new image URL with validation
    pub fn new(url: impl Into<String>) -> AppResult<Self> {
        let url = url.into().trim().to_string();

        if url.is_empty() {
            return Err(AppError::bad_request("Image URL cannot be empty"));
        }

        if url.len() > IMAGE_URL_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Image URL must be at most {} characters",
                IMAGE_URL_MAX_LENGTH
            )));
        }

        if !Self::is_valid_format(&url) {
            return Err(AppError::bad_request("Image URL is not a well-formed URL"));
        }

        Ok(Self(url))
    }

    /// Basic absolute-URL validation
    fn is_valid_format(url: &str) -> bool {
        let rest = match url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
        {
            Some(rest) => rest,
            None => return false,
        };

        // Host is everything up to the first '/', '?' or '#'
        let host = rest
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default();

        if host.is_empty() {
            return false;
        }

        // No whitespace or control characters anywhere
        if url.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return false;
        }

        // Host (minus an optional :port) has valid characters
        let host = host.split(':').next().unwrap_or_default();
        if host.is_empty()
            || !host
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }

        true
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Get the URL as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
