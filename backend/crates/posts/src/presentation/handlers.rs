//! HTTP Handlers
//!
//! Every route sits behind the auth gate, so `AuthenticatedUser` is always
//! present.

use std::sync::Arc;

use auth::AuthenticatedUser;
use axum::Json;
use axum::extract::{Path, State};
use kernel::extract::ValidatedJson;

use crate::application::{
    AddCommentUseCase, CreatePostUseCase, DeletePostUseCase, GetPostUseCase, LikePostUseCase,
    ListPostsUseCase, PostsConfig, RemoveCommentUseCase,
};
use crate::domain::repository::{AuthorDirectory, PostRepository};
use crate::domain::value_objects::CommentRemoval;
use crate::error::PostResult;
use crate::presentation::dto::{
    CommentResponse, LikeResponse, MessageResponse, PostResponse, TextRequest,
};

/// Shared state for post handlers
pub struct PostsAppState<R, A> {
    pub repo: Arc<R>,
    pub authors: Arc<A>,
    pub config: Arc<PostsConfig>,
}

impl<R, A> Clone for PostsAppState<R, A> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            authors: self.authors.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Posts
// ============================================================================

/// POST /api/posts
pub async fn create_post<R, A>(
    State(state): State<PostsAppState<R, A>>,
    user: AuthenticatedUser,
    ValidatedJson(req): ValidatedJson<TextRequest>,
) -> PostResult<Json<PostResponse>>
where
    R: PostRepository + Send + Sync + 'static,
    A: AuthorDirectory + Send + Sync + 'static,
{
    let use_case =
        CreatePostUseCase::new(state.repo.clone(), state.authors.clone(), state.config.clone());
    let post = use_case.execute(&user.user_id, req.text).await?;

    Ok(Json(post.into()))
}

/// GET /api/posts
pub async fn list_posts<R, A>(
    State(state): State<PostsAppState<R, A>>,
) -> PostResult<Json<Vec<PostResponse>>>
where
    R: PostRepository + Send + Sync + 'static,
    A: AuthorDirectory + Send + Sync + 'static,
{
    let posts = ListPostsUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

/// GET /api/posts/{id}
pub async fn get_post<R, A>(
    State(state): State<PostsAppState<R, A>>,
    Path(post_id): Path<String>,
) -> PostResult<Json<PostResponse>>
where
    R: PostRepository + Send + Sync + 'static,
    A: AuthorDirectory + Send + Sync + 'static,
{
    let post = GetPostUseCase::new(state.repo.clone())
        .execute(&post_id)
        .await?;

    Ok(Json(post.into()))
}

/// DELETE /api/posts/{id}
pub async fn delete_post<R, A>(
    State(state): State<PostsAppState<R, A>>,
    user: AuthenticatedUser,
    Path(post_id): Path<String>,
) -> PostResult<Json<MessageResponse>>
where
    R: PostRepository + Send + Sync + 'static,
    A: AuthorDirectory + Send + Sync + 'static,
{
    DeletePostUseCase::new(state.repo.clone())
        .execute(&post_id, &user.user_id)
        .await?;

    Ok(Json(MessageResponse { msg: "post removed" }))
}

// ============================================================================
// Likes
// ============================================================================

/// PUT /api/posts/like/{id}
pub async fn like_post<R, A>(
    State(state): State<PostsAppState<R, A>>,
    user: AuthenticatedUser,
    Path(post_id): Path<String>,
) -> PostResult<Json<Vec<LikeResponse>>>
where
    R: PostRepository + Send + Sync + 'static,
    A: AuthorDirectory + Send + Sync + 'static,
{
    let likes = LikePostUseCase::new(state.repo.clone())
        .like(&post_id, user.user_id)
        .await?;

    Ok(Json(likes.into_iter().map(Into::into).collect()))
}

/// PUT /api/posts/unlike/{id}
pub async fn unlike_post<R, A>(
    State(state): State<PostsAppState<R, A>>,
    user: AuthenticatedUser,
    Path(post_id): Path<String>,
) -> PostResult<Json<Vec<LikeResponse>>>
where
    R: PostRepository + Send + Sync + 'static,
    A: AuthorDirectory + Send + Sync + 'static,
{
    let likes = LikePostUseCase::new(state.repo.clone())
        .unlike(&post_id, user.user_id)
        .await?;

    Ok(Json(likes.into_iter().map(Into::into).collect()))
}

// ============================================================================
// Comments
// ============================================================================

/// POST /api/posts/comment/{id}
pub async fn add_comment<R, A>(
    State(state): State<PostsAppState<R, A>>,
    user: AuthenticatedUser,
    Path(post_id): Path<String>,
    ValidatedJson(req): ValidatedJson<TextRequest>,
) -> PostResult<Json<Vec<CommentResponse>>>
where
    R: PostRepository + Send + Sync + 'static,
    A: AuthorDirectory + Send + Sync + 'static,
{
    let use_case =
        AddCommentUseCase::new(state.repo.clone(), state.authors.clone(), state.config.clone());
    let comments = use_case.execute(&post_id, &user.user_id, req.text).await?;

    Ok(Json(comments.into_iter().map(Into::into).collect()))
}

/// DELETE /api/posts/comment/{id}/{comment_id}
pub async fn remove_comment<R, A>(
    State(state): State<PostsAppState<R, A>>,
    user: AuthenticatedUser,
    Path((post_id, comment_id)): Path<(String, String)>,
) -> PostResult<Json<Vec<CommentResponse>>>
where
    R: PostRepository + Send + Sync + 'static,
    A: AuthorDirectory + Send + Sync + 'static,
{
    remove_comment_with(state, user, post_id, comment_id, CommentRemoval::FirstByRequester).await
}

/// DELETE /api/posts/comment/{id}/{comment_id}/by-id
pub async fn remove_comment_by_id<R, A>(
    State(state): State<PostsAppState<R, A>>,
    user: AuthenticatedUser,
    Path((post_id, comment_id)): Path<(String, String)>,
) -> PostResult<Json<Vec<CommentResponse>>>
where
    R: PostRepository + Send + Sync + 'static,
    A: AuthorDirectory + Send + Sync + 'static,
{
    remove_comment_with(state, user, post_id, comment_id, CommentRemoval::ById).await
}

async fn remove_comment_with<R, A>(
    state: PostsAppState<R, A>,
    user: AuthenticatedUser,
    post_id: String,
    comment_id: String,
    removal: CommentRemoval,
) -> PostResult<Json<Vec<CommentResponse>>>
where
    R: PostRepository + Send + Sync + 'static,
{
    let comments = RemoveCommentUseCase::new(state.repo.clone(), removal)
        .execute(&post_id, &comment_id, &user.user_id)
        .await?;

    Ok(Json(comments.into_iter().map(Into::into).collect()))
}
