//! Domain Value Objects
//!
//! Typed ids and the author snapshot copied onto posts and comments.

use kernel::id::{CommentId, Id, PostId, UserId};
use serde::{Deserialize, Serialize};

use crate::error::{PostError, PostResult};

/// Parse a post id taken from a request path
pub fn parse_post_id(raw: &str) -> PostResult<PostId> {
    parse_id(raw)
}

/// Parse a comment id taken from a request path
pub fn parse_comment_id(raw: &str) -> PostResult<CommentId> {
    parse_id(raw)
}

fn parse_id<T>(raw: &str) -> PostResult<Id<T>> {
    Id::parse_str(raw.trim()).map_err(|_| PostError::MalformedId)
}

/// Author details as they were when a post or comment was written.
/// Never refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub user_id: UserId,
    pub name: String,
    pub avatar: Option<String>,
}

/// How `remove_comment` picks the comment to delete once the requester
/// has been authorized against the addressed comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentRemoval {
    /// Remove the first comment written by the requester, which is not
    /// necessarily the addressed one
    FirstByRequester,
    /// Remove exactly the addressed comment
    ById,
}
