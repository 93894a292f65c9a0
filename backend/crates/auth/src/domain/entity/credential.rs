//! Credential Entity
//!
//! Stored password hash for an identity.
//! Separated from the Identity entity to isolate sensitive data.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::user_password::UserPassword;

/// Credential entity
#[derive(Debug, Clone)]
pub struct Credential {
    /// Reference to Identity
    pub user_id: UserId,
    /// Argon2id hash in PHC format
    pub password_hash: UserPassword,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Credential {
    pub fn new(user_id: UserId, password_hash: UserPassword) -> Self {
        Self {
            user_id,
            password_hash,
            updated_at: Utc::now(),
        }
    }
}
