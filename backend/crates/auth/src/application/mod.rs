//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod current_identity;
pub mod provision;
pub mod sign_in;
pub mod token;
pub mod verify_credentials;

// Re-exports
pub use config::AuthConfig;
pub use current_identity::CurrentIdentityUseCase;
pub use provision::{ProvisionIdentityUseCase, ProvisionInput};
pub use sign_in::{SignInInput, SignInUseCase};
pub use token::{IssuedToken, TokenService};
pub use verify_credentials::CredentialVerifier;
