//! Comment Use Cases
//!
//! Add and remove comments on a post. Every mutation is one `update_post`.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::PostsConfig;
use crate::application::load_post;
use crate::domain::entities::Comment;
use crate::domain::repository::{AuthorDirectory, PostRepository};
use crate::domain::value_objects::{CommentRemoval, parse_comment_id};
use crate::error::{PostError, PostResult};

pub struct AddCommentUseCase<R, A>
where
    R: PostRepository,
    A: AuthorDirectory,
{
    repo: Arc<R>,
    authors: Arc<A>,
    config: Arc<PostsConfig>,
}

impl<R, A> AddCommentUseCase<R, A>
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

    /// Returns the updated comments, newest first
    pub async fn execute(
        &self,
        post_id: &str,
        author_id: &UserId,
        text: String,
    ) -> PostResult<Vec<Comment>> {
        self.config.check_text(&text)?;

        let mut post = load_post(self.repo.as_ref(), post_id).await?;

        let author = self
            .authors
            .find_author(author_id)
            .await?
            .ok_or(PostError::UnknownAuthor)?;

        let comment_id = post.add_comment(&author, text);
        self.repo.update_post(&post).await?;

        tracing::info!(post_id = %post.id, comment_id = %comment_id, "Comment added");

        Ok(post.comments)
    }
}

pub struct RemoveCommentUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
    removal: CommentRemoval,
}

impl<R> RemoveCommentUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>, removal: CommentRemoval) -> Self {
        Self { repo, removal }
    }

    /// Returns the updated comments
    pub async fn execute(
        &self,
        post_id: &str,
        comment_id: &str,
        requester: &UserId,
    ) -> PostResult<Vec<Comment>> {
        let mut post = load_post(self.repo.as_ref(), post_id).await?;
        // A malformed comment id can match nothing on the post
        let comment_id = parse_comment_id(comment_id).map_err(|_| PostError::CommentNotFound)?;

        post.remove_comment(&comment_id, requester, self.removal)?;
        self.repo.update_post(&post).await?;

        tracing::info!(
            post_id = %post.id,
            comment_id = %comment_id,
            removal = ?self.removal,
            "Comment removed"
        );

        Ok(post.comments)
    }
}
