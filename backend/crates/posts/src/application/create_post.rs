//! Create Post Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::PostsConfig;
use crate::domain::entities::Post;
use crate::domain::repository::{AuthorDirectory, PostRepository};
use crate::error::{PostError, PostResult};

pub struct CreatePostUseCase<R, A>
where
    R: PostRepository,
    A: AuthorDirectory,
{
    repo: Arc<R>,
    authors: Arc<A>,
    config: Arc<PostsConfig>,
}

impl<R, A> CreatePostUseCase<R, A>
where
    R: PostRepository,
    A: AuthorDirectory,
{
    pub fn new(repo: Arc<R>, authors: Arc<A>, config: Arc<PostsConfig>) -> Self {
        Self {
            repo,
            authors,
            config,
        }
    }

    pub async fn execute(&self, author_id: &UserId, text: String) -> PostResult<Post> {
        self.config.check_text(&text)?;

        let author = self
            .authors
            .find_author(author_id)
            .await?
            .ok_or(PostError::UnknownAuthor)?;

        let post = Post::new(&author, text);
        self.repo.create(&post).await?;

        tracing::info!(post_id = %post.id, author_id = %post.author_id, "Post created");

        Ok(post)
    }
}
