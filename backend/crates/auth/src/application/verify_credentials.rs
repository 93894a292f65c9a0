//! Credential Verifier
//!
//! Checks an email/password pair against the stored credential.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::identity::Identity;
use crate::domain::repository::{CredentialRepository, IdentityRepository};
use crate::domain::value_object::{email::Email, user_password::{RawPassword, UserPassword}};
use crate::error::{AuthError, AuthResult};

/// Credential verifier
///
/// Unknown email and wrong password produce the same error, and both
/// paths run one Argon2 verification.
pub struct CredentialVerifier<I, C>
where
    I: IdentityRepository,
    C: CredentialRepository,
{
    identity_repo: Arc<I>,
    credential_repo: Arc<C>,
    config: Arc<AuthConfig>,
}

impl<I, C> CredentialVerifier<I, C>
where
    I: IdentityRepository,
    C: CredentialRepository,
{
    pub fn new(identity_repo: Arc<I>, credential_repo: Arc<C>, config: Arc<AuthConfig>) -> Self {
        Self {
            identity_repo,
            credential_repo,
            config,
        }
    }

    pub async fn verify(&self, email: &str, password: String) -> AuthResult<Identity> {
        let raw_password = RawPassword::for_verification(password)
            .map_err(|_| AuthError::InvalidCredentials)?;

        let identity = match Email::new(email) {
            Ok(email) => self.identity_repo.find_by_email(&email).await?,
            Err(_) => None,
        };

        let Some(identity) = identity else {
            UserPassword::verify_absent(&raw_password, self.config.pepper());
            return Err(AuthError::InvalidCredentials);
        };

        let credential = self
            .credential_repo
            .find_by_user_id(&identity.user_id)
            .await?;

        let Some(credential) = credential else {
            tracing::error!(user_id = %identity.user_id, "Identity has no stored credential");
            UserPassword::verify_absent(&raw_password, self.config.pepper());
            return Err(AuthError::InvalidCredentials);
        };

        if !credential
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(identity)
    }
}
