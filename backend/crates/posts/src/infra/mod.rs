//! Infrastructure Layer
//!
//! Database implementations and the identity-backed author directory.

pub mod authors;
pub mod memory;
pub mod postgres;

pub use authors::IdentityAuthorDirectory;
pub use memory::InMemoryPostRepository;
pub use postgres::PgPostRepository;
