//! Domain Entities
//!
//! The Post aggregate. Likes and comments only change through the methods
//! below, which enforce the interaction rules; persistence stores the result.

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, PostId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Author, CommentRemoval};
use crate::error::{PostError, PostResult};

/// A (post, user) like; at most one per user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub user_id: UserId,
}

/// Comment entity, newest first within its post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author_id: UserId,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: &Author, text: impl Into<String>) -> Self {
        Self {
            id: CommentId::new(),
            author_id: author.user_id,
            author_name: author.name.clone(),
            author_avatar: author.avatar.clone(),
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    /// Immutable after creation
    pub author_id: UserId,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
}

impl Post {
    /// Create a new post with no likes or comments
    pub fn new(author: &Author, text: impl Into<String>) -> Self {
        Self {
            id: PostId::new(),
            author_id: author.user_id,
            author_name: author.name.clone(),
            author_avatar: author.avatar.clone(),
            text: text.into(),
            created_at: Utc::now(),
            likes: Vec::new(),
            comments: Vec::new(),
        }
    }

    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        &self.author_id == user_id
    }

    pub fn is_liked_by(&self, user_id: &UserId) -> bool {
        self.likes.iter().any(|like| &like.user_id == user_id)
    }

    /// `NotLiked` -> `Liked`; the new like goes to the front
    pub fn like(&mut self, user_id: UserId) -> PostResult<()> {
        if self.is_liked_by(&user_id) {
            return Err(PostError::AlreadyLiked);
        }
        self.likes.insert(0, Like { user_id });
        Ok(())
    }

    /// `Liked` -> `NotLiked`; removes only the first matching entry
    pub fn unlike(&mut self, user_id: &UserId) -> PostResult<()> {
        let index = self
            .likes
            .iter()
            .position(|like| &like.user_id == user_id)
            .ok_or(PostError::NotLiked)?;
        self.likes.remove(index);
        Ok(())
    }

    /// Prepend a comment and return its id
    pub fn add_comment(&mut self, author: &Author, text: impl Into<String>) -> CommentId {
        let comment = Comment::new(author, text);
        let id = comment.id;
        self.comments.insert(0, comment);
        id
    }

    /// Remove a comment on behalf of `requester`
    ///
    /// The addressed comment must exist and belong to the requester. Which
    /// comment is then removed depends on `removal`.
    pub fn remove_comment(
        &mut self,
        comment_id: &CommentId,
        requester: &UserId,
        removal: CommentRemoval,
    ) -> PostResult<()> {
        let addressed = self
            .comments
            .iter()
            .position(|comment| &comment.id == comment_id)
            .ok_or(PostError::CommentNotFound)?;

        if &self.comments[addressed].author_id != requester {
            return Err(PostError::Forbidden);
        }

        let index = match removal {
            CommentRemoval::ById => addressed,
            CommentRemoval::FirstByRequester => self
                .comments
                .iter()
                .position(|comment| &comment.author_id == requester)
                .unwrap_or(addressed),
        };

        self.comments.remove(index);
        Ok(())
    }
}
