//! Posts Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Post aggregate, value objects, repository traits
//! - `application/` - One use case per operation
//! - `infra/` - PostgreSQL and in-memory repositories, author directory
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Interaction Rules
//! - A user likes a post at most once; unlike only removes one's own like
//! - Comments are newest first and carry an author snapshot
//! - Only the author may delete a post or remove a comment
//! - Each mutation is a single `update_post`; concurrent writers to the same
//!   post are last-write-wins

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::PostsConfig;
pub use error::{PostError, PostResult};
pub use infra::{IdentityAuthorDirectory, InMemoryPostRepository, PgPostRepository};
pub use presentation::router::posts_router;
