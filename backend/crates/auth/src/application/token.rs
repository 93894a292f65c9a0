//! Token Issuer / Validator
//!
//! HS256-signed JWTs binding an identity for a limited time.
//! The token is self-contained; nothing is stored server-side.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Only algorithm accepted when decoding
const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// Token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Claims {
    /// Subject (identity ID as UUID string)
    sub: String,
    /// Issued at (Unix timestamp)
    iat: i64,
    /// Expiration time (Unix timestamp)
    exp: i64,
}

/// A freshly issued token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Issues and validates identity tokens
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(&config.jwt_secret),
            decoding_key: DecodingKey::from_secret(&config.jwt_secret),
            ttl_secs: config.token_ttl_secs(),
        }
    }

    /// Issue a token for `user_id`, valid for the configured TTL from now
    pub fn issue(&self, user_id: &UserId) -> AuthResult<IssuedToken> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token as if the current time were `now`
    pub fn issue_at(&self, user_id: &UserId, now: DateTime<Utc>) -> AuthResult<IssuedToken> {
        let iat = now.timestamp();
        let exp = iat + self.ttl_secs;

        let claims = Claims {
            sub: user_id.to_string(),
            iat,
            exp,
        };

        let token = encode(&Header::new(TOKEN_ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to sign token: {}", e)))?;

        let expires_at = DateTime::<Utc>::from_timestamp(exp, 0)
            .ok_or_else(|| AuthError::Internal("Token expiry out of range".to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Validate a token and return the identity it binds
    ///
    /// Bad signature, malformed input, a foreign algorithm and expiry all
    /// collapse into `InvalidToken`.
    pub fn validate(&self, token: &str) -> AuthResult<UserId> {
        self.validate_at(token, Utc::now())
    }

    /// Validate a token as if the current time were `now`
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<UserId> {
        let mut validation = Validation::new(TOKEN_ALGORITHM);
        validation.leeway = 0;
        // Expiry is checked below against `now` instead of the wall clock
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!(error = %e, "Token rejected");
            AuthError::InvalidToken
        })?;

        if data.claims.exp <= now.timestamp() {
            return Err(AuthError::InvalidToken);
        }

        UserId::parse_str(&data.claims.sub).map_err(|_| AuthError::InvalidToken)
    }
}
