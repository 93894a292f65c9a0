//! Like / Unlike Use Cases
//!
//! Per (post, user): `NotLiked` -> `Liked` via like, back via unlike.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::load_post;
use crate::domain::entities::Like;
use crate::domain::repository::PostRepository;
use crate::error::PostResult;

pub struct LikePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> LikePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns the updated likes, newest first
    pub async fn like(&self, post_id: &str, user_id: UserId) -> PostResult<Vec<Like>> {
        let mut post = load_post(self.repo.as_ref(), post_id).await?;

        post.like(user_id)?;
        self.repo.update_post(&post).await?;

        tracing::info!(post_id = %post.id, user_id = %user_id, "Post liked");

        Ok(post.likes)
    }

    /// Returns the updated likes
    pub async fn unlike(&self, post_id: &str, user_id: UserId) -> PostResult<Vec<Like>> {
        let mut post = load_post(self.repo.as_ref(), post_id).await?;

        post.unlike(&user_id)?;
        self.repo.update_post(&post).await?;

        tracing::info!(post_id = %post.id, user_id = %user_id, "Post unliked");

        Ok(post.likes)
    }
}
