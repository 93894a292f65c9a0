//! Posts Error Types
//!
//! This module provides post-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use auth::AuthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Posts-specific result type alias
pub type PostResult<T> = Result<T, PostError>;

/// Posts-specific error variants
#[derive(Debug, Error)]
pub enum PostError {
    /// Path id is not a well-formed id; reported like a missing post
    #[error("post not found")]
    MalformedId,

    /// No post with that id
    #[error("post not found")]
    PostNotFound,

    /// No comment with that id on the post
    #[error("comment not found")]
    CommentNotFound,

    /// Requester already appears in the post's likes
    #[error("post already liked")]
    AlreadyLiked,

    /// Requester does not appear in the post's likes
    #[error("post was not liked")]
    NotLiked,

    /// Requester does not own the post or comment
    #[error("user not authorized")]
    Forbidden,

    /// Token subject no longer resolves to an identity
    #[error("token invalid")]
    UnknownAuthor,

    /// Post or comment text longer than the configured limit
    #[error("text must be at most {max} characters")]
    TextTooLong { max: usize },

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PostError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PostError::PostNotFound => StatusCode::NOT_FOUND,
            PostError::MalformedId
            | PostError::CommentNotFound
            | PostError::AlreadyLiked
            | PostError::NotLiked
            | PostError::TextTooLong { .. } => StatusCode::BAD_REQUEST,
            PostError::Forbidden => StatusCode::FORBIDDEN,
            PostError::UnknownAuthor => StatusCode::UNAUTHORIZED,
            PostError::Database(_) | PostError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PostError::PostNotFound => ErrorKind::NotFound,
            PostError::MalformedId
            | PostError::CommentNotFound
            | PostError::AlreadyLiked
            | PostError::NotLiked
            | PostError::TextTooLong { .. } => ErrorKind::BadRequest,
            PostError::Forbidden => ErrorKind::Forbidden,
            PostError::UnknownAuthor => ErrorKind::Unauthorized,
            PostError::Database(_) | PostError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            PostError::Database(_) | PostError::Internal(_) => AppError::internal("Server error"),
            PostError::TextTooLong { .. } => AppError::new(self.kind(), "Validation failed")
                .with_field_error("text", self.to_string()),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PostError::Database(e) => {
                tracing::error!(error = %e, "Posts database error");
            }
            PostError::Internal(msg) => {
                tracing::error!(message = %msg, "Posts internal error");
            }
            PostError::Forbidden => {
                tracing::warn!("Ownership check failed");
            }
            PostError::UnknownAuthor => {
                tracing::warn!("Valid token for an identity that no longer exists");
            }
            _ => {
                tracing::debug!(error = %self, "Posts error");
            }
        }
    }
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AuthError> for PostError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Database(e) => PostError::Database(e),
            other => PostError::Internal(other.to_string()),
        }
    }
}
