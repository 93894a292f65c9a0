//! Auth Router

use std::sync::Arc;

use axum::{Router, middleware, routing::get};

use crate::application::{config::AuthConfig, token::TokenService};
use crate::domain::repository::{CredentialRepository, IdentityRepository};
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthGate, require_auth};

/// Create the Auth router for any repository implementation
///
/// `GET /` requires a token, `POST /` signs in.
pub fn auth_router<R>(repo: R, config: Arc<AuthConfig>, tokens: Arc<TokenService>) -> Router
where
    R: IdentityRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    let gate = AuthGate::new(tokens.clone(), &config);
    let state = AuthAppState {
        repo: Arc::new(repo),
        config,
        tokens,
    };

    Router::new()
        .route(
            "/",
            get(handlers::current_identity::<R>)
                .route_layer(middleware::from_fn_with_state(gate, require_auth))
                .post(handlers::sign_in::<R>),
        )
        .with_state(state)
}
