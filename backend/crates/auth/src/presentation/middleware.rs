//! Auth Middleware
//!
//! Gate for protected routes. Reads the token from the configured header
//! (`x-auth-token`), falling back to `Authorization: Bearer`, and stores the
//! authenticated identity in request extensions.

use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::{HeaderMap, header, request::Parts};
use axum::middleware::Next;
use axum::response::Response;
use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::error::{AuthError, AuthResult};

/// Middleware state
#[derive(Clone)]
pub struct AuthGate {
    tokens: Arc<TokenService>,
    header_name: Arc<str>,
}

impl AuthGate {
    pub fn new(tokens: Arc<TokenService>, config: &AuthConfig) -> Self {
        Self {
            tokens,
            header_name: Arc::from(config.token_header_name.as_str()),
        }
    }

    /// Resolve the request's identity from its headers
    pub fn authenticate(&self, headers: &HeaderMap) -> AuthResult<AuthenticatedUser> {
        let token = extract_token(headers, &self.header_name).ok_or(AuthError::MissingToken)?;
        let user_id = self.tokens.validate(token)?;
        Ok(AuthenticatedUser { user_id })
    }
}

/// Identity attached to a request that passed the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that requires a valid token
pub async fn require_auth(
    State(gate): State<AuthGate>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let user = gate.authenticate(req.headers())?;

    tracing::debug!(user_id = %user.user_id, "Request authenticated");
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or(AuthError::MissingToken)
    }
}

fn extract_token<'a>(headers: &'a HeaderMap, header_name: &str) -> Option<&'a str> {
    let from_header = headers
        .get(header_name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|token| !token.is_empty());

    from_header.or_else(|| {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
    })
}
