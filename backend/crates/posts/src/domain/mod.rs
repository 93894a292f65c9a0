//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entities;
pub mod repository;
pub mod value_objects;

// Re-exports
pub use entities::{Comment, Like, Post};
pub use repository::{AuthorDirectory, PostRepository};
pub use value_objects::{Author, CommentRemoval, parse_comment_id, parse_post_id};
