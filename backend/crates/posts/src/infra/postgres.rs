//! PostgreSQL Repository Implementation
//!
//! A post is one row; likes and comments live in JSONB columns so that
//! `update_post` is a single statement.

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entities::{Comment, Like, Post};
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// PostgreSQL-backed post repository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PostRepository for PgPostRepository {
    async fn create(&self, post: &Post) -> PostResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                id,
                author_id,
                author_name,
                author_avatar,
                text,
                created_at,
                likes,
                comments
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(post.id.as_uuid())
        .bind(post.author_id.as_uuid())
        .bind(&post.author_name)
        .bind(&post.author_avatar)
        .bind(&post.text)
        .bind(post.created_at)
        .bind(Json(&post.likes))
        .bind(Json(&post.comments))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &PostId) -> PostResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                id,
                author_id,
                author_name,
                author_avatar,
                text,
                created_at,
                likes,
                comments
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn list_newest_first(&self) -> PostResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                id,
                author_id,
                author_name,
                author_avatar,
                text,
                created_at,
                likes,
                comments
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn update_post(&self, post: &Post) -> PostResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE posts SET
                likes = $2,
                comments = $3
            WHERE id = $1
            "#,
        )
        .bind(post.id.as_uuid())
        .bind(Json(&post.likes))
        .bind(Json(&post.comments))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(PostError::PostNotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: &PostId) -> PostResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    author_id: Uuid,
    author_name: String,
    author_avatar: Option<String>,
    text: String,
    created_at: DateTime<Utc>,
    likes: Json<Vec<Like>>,
    comments: Json<Vec<Comment>>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            id: PostId::from_uuid(self.id),
            author_id: UserId::from_uuid(self.author_id),
            author_name: self.author_name,
            author_avatar: self.author_avatar,
            text: self.text,
            created_at: self.created_at,
            likes: self.likes.0,
            comments: self.comments.0,
        }
    }
}
