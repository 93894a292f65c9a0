//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Token service, credential verification, use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router, auth gate
//!
//! ## Features
//! - Email + password sign-in returning a signed token
//! - Token-gated routes (`x-auth-token` header)
//! - Current identity lookup
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optionally peppered
//! - HS256 tokens valid for one day, no server-side session state
//! - Unknown email and wrong password are indistinguishable to the caller

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::TokenService;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryAuthRepository, postgres::PgAuthRepository};
pub use presentation::middleware::{AuthGate, AuthenticatedUser, require_auth};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
