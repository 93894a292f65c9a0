//! In-memory Repository Implementation
//!
//! Used by tests and by the server when no `DATABASE_URL` is configured.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::PostId;
use tokio::sync::RwLock;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// In-memory post repository
///
/// Cloning shares the same underlying map.
#[derive(Clone, Default)]
pub struct InMemoryPostRepository {
    posts: Arc<RwLock<HashMap<PostId, Post>>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: &Post) -> PostResult<()> {
        self.posts.write().await.insert(post.id, post.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &PostId) -> PostResult<Option<Post>> {
        Ok(self.posts.read().await.get(id).cloned())
    }

    async fn list_newest_first(&self) -> PostResult<Vec<Post>> {
        let mut posts: Vec<Post> = self.posts.read().await.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn update_post(&self, post: &Post) -> PostResult<()> {
        let mut posts = self.posts.write().await;
        let stored = posts.get_mut(&post.id).ok_or(PostError::PostNotFound)?;

        stored.likes = post.likes.clone();
        stored.comments = post.comments.clone();
        Ok(())
    }

    async fn delete(&self, id: &PostId) -> PostResult<bool> {
        Ok(self.posts.write().await.remove(id).is_some())
    }
}
