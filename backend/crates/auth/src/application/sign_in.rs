//! Sign In Use Case
//!
//! Verifies credentials and issues a token.

use std::sync::Arc;

use crate::application::token::{IssuedToken, TokenService};
use crate::application::verify_credentials::CredentialVerifier;
use crate::domain::repository::{CredentialRepository, IdentityRepository};
use crate::error::AuthResult;

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in use case
pub struct SignInUseCase<I, C>
where
    I: IdentityRepository,
    C: CredentialRepository,
{
    verifier: CredentialVerifier<I, C>,
    tokens: Arc<TokenService>,
}

impl<I, C> SignInUseCase<I, C>
where
    I: IdentityRepository,
    C: CredentialRepository,
{
    pub fn new(verifier: CredentialVerifier<I, C>, tokens: Arc<TokenService>) -> Self {
        Self { verifier, tokens }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<IssuedToken> {
        let identity = self.verifier.verify(&input.email, input.password).await?;
        let issued = self.tokens.issue(&identity.user_id)?;

        tracing::info!(
            user_id = %identity.user_id,
            expires_at = %issued.expires_at,
            "User signed in"
        );

        Ok(issued)
    }
}
