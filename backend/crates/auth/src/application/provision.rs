//! Provision Identity
//!
//! Stores a new identity with a hashed password. There is no public
//! registration endpoint; this backs seeding and fixtures.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::{credential::Credential, identity::Identity};
use crate::domain::repository::IdentityRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::AuthResult;

/// Provision input
pub struct ProvisionInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: Option<String>,
}

/// Provision identity use case
pub struct ProvisionIdentityUseCase<I>
where
    I: IdentityRepository,
{
    identity_repo: Arc<I>,
    config: Arc<AuthConfig>,
}

impl<I> ProvisionIdentityUseCase<I>
where
    I: IdentityRepository,
{
    pub fn new(identity_repo: Arc<I>, config: Arc<AuthConfig>) -> Self {
        Self {
            identity_repo,
            config,
        }
    }

    pub async fn execute(&self, input: ProvisionInput) -> AuthResult<Identity> {
        let email = Email::new(input.email)?;
        let raw_password = RawPassword::new(input.password)?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let identity = Identity::new(input.name, email, input.avatar);
        let credential = Credential::new(identity.user_id, password_hash);

        self.identity_repo.create(&identity, &credential).await?;

        tracing::info!(user_id = %identity.user_id, "Identity provisioned");

        Ok(identity)
    }
}
