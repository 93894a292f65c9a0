//! Application Layer
//!
//! Use cases. Path ids arrive as raw strings and are parsed here, so a
//! malformed id surfaces as `MalformedId`.

pub mod comment;
pub mod config;
pub mod create_post;
pub mod delete_post;
pub mod get_post;
pub mod like_post;
pub mod list_posts;

// Re-exports
pub use comment::{AddCommentUseCase, RemoveCommentUseCase};
pub use config::PostsConfig;
pub use create_post::CreatePostUseCase;
pub use delete_post::DeletePostUseCase;
pub use get_post::GetPostUseCase;
pub use like_post::LikePostUseCase;
pub use list_posts::ListPostsUseCase;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::parse_post_id;
use crate::error::{PostError, PostResult};

/// Parse `post_id` and load the post
pub(crate) async fn load_post<R>(repo: &R, post_id: &str) -> PostResult<Post>
where
    R: PostRepository,
{
    let id = parse_post_id(post_id)?;
    repo.find_by_id(&id).await?.ok_or(PostError::PostNotFound)
}
