//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::{credential::Credential, identity::Identity};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Identity repository trait
#[trait_variant::make(IdentityRepository: Send)]
pub trait LocalIdentityRepository {
    /// Store a new identity together with its credential
    async fn create(&self, identity: &Identity, credential: &Credential) -> AuthResult<()>;

    /// Find identity by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<Identity>>;

    /// Find identity by (normalized) email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Identity>>;
}

/// Credential repository trait
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Find the stored credential for an identity
    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Credential>>;
}
