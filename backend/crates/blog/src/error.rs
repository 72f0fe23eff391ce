//! Blog Error Types
//!
//! This module provides blog-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use auth::AuthError;

/// Blog-specific result type alias
pub type BlogResult<T> = Result<T, BlogError>;

/// Blog-specific error variants
#[derive(Debug, Error)]
pub enum BlogError {
    /// Post does not exist
    #[error("Post not found")]
    PostNotFound,

    /// A post with this title already exists
    #[error("A post with this title already exists")]
    DuplicateTitle,

    /// One or more fields failed validation
    #[error("Validation failed for fields: {fields:?}")]
    Validation { fields: Vec<String> },

    /// No active session where one is required
    #[error("Authentication required")]
    Unauthenticated,

    /// Authenticated but not the administrator
    #[error("Forbidden")]
    Forbidden,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BlogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BlogError::PostNotFound => StatusCode::NOT_FOUND,
            BlogError::DuplicateTitle => StatusCode::CONFLICT,
            BlogError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            BlogError::Unauthenticated => StatusCode::UNAUTHORIZED,
            BlogError::Forbidden => StatusCode::FORBIDDEN,
            BlogError::Database(_) | BlogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::PostNotFound => ErrorKind::NotFound,
            BlogError::DuplicateTitle => ErrorKind::Conflict,
            BlogError::Validation { .. } => ErrorKind::UnprocessableEntity,
            BlogError::Unauthenticated => ErrorKind::Unauthorized,
            BlogError::Forbidden => ErrorKind::Forbidden,
            BlogError::Database(_) | BlogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BlogError::Database(e) => {
                tracing::error!(error = %e, "Blog database error");
            }
            BlogError::Internal(msg) => {
                tracing::error!(message = %msg, "Blog internal error");
            }
            BlogError::Forbidden => {
                tracing::warn!("Admin gate rejected a request");
            }
            _ => {
                tracing::debug!(error = %self, "Blog error");
            }
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            // Forbidden aborts with a bare 403, no body
            BlogError::Forbidden => StatusCode::FORBIDDEN.into_response(),
            // Validation carries the offending field names so the form
            // layer can re-render with per-field messages
            BlogError::Validation { fields } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({
                    "title": ErrorKind::UnprocessableEntity.as_str(),
                    "status": ErrorKind::UnprocessableEntity.status_code(),
                    "fields": fields,
                })),
            )
                .into_response(),
            other => other.to_app_error().into_response(),
        }
    }
}

impl From<AuthError> for BlogError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Forbidden => BlogError::Forbidden,
            AuthError::Unauthenticated => BlogError::Unauthenticated,
            AuthError::Database(e) => BlogError::Database(e),
            other => BlogError::Internal(other.to_string()),
        }
    }
}
