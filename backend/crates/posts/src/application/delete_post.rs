//! Delete Post Use Case
//!
//! Only the author may delete a post.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::load_post;
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

pub struct DeletePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> DeletePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, post_id: &str, requester: &UserId) -> PostResult<()> {
        let post = load_post(self.repo.as_ref(), post_id).await?;

        if !post.is_authored_by(requester) {
            return Err(PostError::Forbidden);
        }

        // Deleted concurrently between load and delete
        if !self.repo.delete(&post.id).await? {
            return Err(PostError::PostNotFound);
        }

        tracing::info!(post_id = %post.id, "Post removed");

        Ok(())
    }
}
