//! Posts Router

use std::sync::Arc;

use auth::{AuthGate, require_auth};
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::application::config::PostsConfig;
use crate::domain::repository::{AuthorDirectory, PostRepository};
use crate::presentation::handlers::{self, PostsAppState};

/// Create the Posts router for any repository implementation
///
/// Every route requires a token.
pub fn posts_router<R, A>(repo: R, authors: A, config: Arc<PostsConfig>, gate: AuthGate) -> Router
where
    R: PostRepository + Send + Sync + 'static,
    A: AuthorDirectory + Send + Sync + 'static,
{
    let state = PostsAppState {
        repo: Arc::new(repo),
        authors: Arc::new(authors),
        config,
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_posts::<R, A>).post(handlers::create_post::<R, A>),
        )
        .route(
            "/{id}",
            get(handlers::get_post::<R, A>).delete(handlers::delete_post::<R, A>),
        )
        .route("/like/{id}", put(handlers::like_post::<R, A>))
        .route("/unlike/{id}", put(handlers::unlike_post::<R, A>))
        .route("/comment/{id}", post(handlers::add_comment::<R, A>))
        .route(
            "/comment/{id}/{comment_id}",
            delete(handlers::remove_comment::<R, A>),
        )
        .route(
            "/comment/{id}/{comment_id}/by-id",
            delete(handlers::remove_comment_by_id::<R, A>),
        )
        .route_layer(middleware::from_fn_with_state(gate, require_auth))
        .with_state(state)
}
