//! Get Post Use Case

use std::sync::Arc;

use crate::application::load_post;
use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::error::PostResult;

pub struct GetPostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> GetPostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, post_id: &str) -> PostResult<Post> {
        load_post(self.repo.as_ref(), post_id).await
    }
}
