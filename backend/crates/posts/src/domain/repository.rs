//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{PostId, UserId};

use crate::domain::entities::Post;
use crate::domain::value_objects::Author;
use crate::error::PostResult;

/// Post store
///
/// Each call is atomic on its own. Read-modify-write sequences built from
/// `find_by_id` and `update_post` are not; concurrent writers to the same
/// post resolve last-write-wins.
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Store a new post
    async fn create(&self, post: &Post) -> PostResult<()>;

    /// Find post by ID
    async fn find_by_id(&self, id: &PostId) -> PostResult<Option<Post>>;

    /// All posts, newest first
    async fn list_newest_first(&self) -> PostResult<Vec<Post>>;

    /// Replace the post's likes and comments in one write.
    /// `PostNotFound` if the post is gone.
    async fn update_post(&self, post: &Post) -> PostResult<()>;

    /// Delete post; returns false if it did not exist
    async fn delete(&self, id: &PostId) -> PostResult<bool>;
}

/// Source of author snapshots
#[trait_variant::make(AuthorDirectory: Send)]
pub trait LocalAuthorDirectory {
    async fn find_author(&self, user_id: &UserId) -> PostResult<Option<Author>>;
}
