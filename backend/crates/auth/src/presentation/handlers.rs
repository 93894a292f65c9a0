//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use kernel::extract::ValidatedJson;

use crate::application::config::AuthConfig;
use crate::application::{
    CredentialVerifier, CurrentIdentityUseCase, SignInInput, SignInUseCase, TokenService,
};
use crate::domain::repository::{CredentialRepository, IdentityRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{IdentityResponse, SignInRequest, SignInResponse};
use crate::presentation::middleware::AuthenticatedUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: IdentityRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
}

/// GET /api/auth
pub async fn current_identity<R>(
    State(state): State<AuthAppState<R>>,
    user: AuthenticatedUser,
) -> AuthResult<Json<IdentityResponse>>
where
    R: IdentityRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    let use_case = CurrentIdentityUseCase::new(state.repo.clone());
    let identity = use_case.execute(&user.user_id).await?;

    Ok(Json(identity.into()))
}

/// POST /api/auth
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    ValidatedJson(req): ValidatedJson<SignInRequest>,
) -> AuthResult<Json<SignInResponse>>
where
    R: IdentityRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    let verifier =
        CredentialVerifier::new(state.repo.clone(), state.repo.clone(), state.config.clone());
    let use_case = SignInUseCase::new(verifier, state.tokens.clone());

    let issued = use_case
        .execute(SignInInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(SignInResponse {
        token: issued.token,
    }))
}
