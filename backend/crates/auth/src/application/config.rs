//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup,
//! shared behind `Arc`, never mutated afterwards.

use std::fmt;
use std::time::Duration;

/// Length of generated development secrets in bytes
const GENERATED_SECRET_LEN: usize = 32;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Request header carrying the token
    pub token_header_name: String,
    /// HMAC secret used to sign and verify tokens.
    /// Changing it invalidates every outstanding token.
    pub jwt_secret: Vec<u8>,
    /// Token lifetime from issuance (1 day)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_header_name: "x-auth-token".to_string(),
            jwt_secret: Vec::new(),
            token_ttl: Duration::from_secs(24 * 3600), // 1 day
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with the given signing secret
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create config with a random signing secret (for development)
    ///
    /// Tokens do not survive a restart.
    pub fn with_random_secret() -> Self {
        Self::with_secret(platform::crypto::random_bytes(GENERATED_SECRET_LEN))
    }

    /// Get token TTL in seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_header_name", &self.token_header_name)
            .field("jwt_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
