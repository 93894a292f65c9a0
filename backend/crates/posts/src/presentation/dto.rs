//! API DTOs (Data Transfer Objects)
//!
//! Field names follow the wire format the frontend reads:
//! `user` for the author id, `name`/`avatar` for the author snapshot,
//! `date` for the creation time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Comment, Like, Post};

/// Body of `POST /posts` and `POST /posts/comment/{id}`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TextRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LikeResponse {
    pub user: String,
}

impl From<Like> for LikeResponse {
    fn from(like: Like) -> Self {
        Self {
            user: like.user_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub user: String,
    pub text: String,
    pub name: String,
    pub avatar: Option<String>,
    pub date: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            user: comment.author_id.to_string(),
            text: comment.text,
            name: comment.author_name,
            avatar: comment.author_avatar,
            date: comment.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub user: String,
    pub text: String,
    pub name: String,
    pub avatar: Option<String>,
    pub likes: Vec<LikeResponse>,
    pub comments: Vec<CommentResponse>,
    pub date: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            user: post.author_id.to_string(),
            text: post.text,
            name: post.author_name,
            avatar: post.author_avatar,
            likes: post.likes.into_iter().map(Into::into).collect(),
            comments: post.comments.into_iter().map(Into::into).collect(),
            date: post.created_at,
        }
    }
}

/// Body of `DELETE /posts/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub msg: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_required() {
        let missing: TextRequest = serde_json::from_str("{}").unwrap();
        let errors = missing.validate().unwrap_err();
        let text_errors = errors.field_errors().get("text").cloned().unwrap();
        assert_eq!(
            text_errors[0].message.as_deref(),
            Some("text is required")
        );

        let ok: TextRequest = serde_json::from_str(r#"{"text":"hello"}"#).unwrap();
        assert!(ok.validate().is_ok());
    }
}
