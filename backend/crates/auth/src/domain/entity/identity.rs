//! Identity Entity
//!
//! An authenticated user's durable record, without any credential material.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::email::Email;

/// Identity entity
///
/// Read-only in this service; identities are created by registration,
/// which lives elsewhere. The password hash is held by [`Credential`].
///
/// [`Credential`]: crate::domain::entity::credential::Credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Immutable identifier, used as the token subject
    pub user_id: UserId,
    /// Display name, copied onto posts and comments at creation time
    pub name: String,
    /// Unique login email
    pub email: Email,
    /// Avatar URL
    pub avatar: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Create a new identity
    pub fn new(name: impl Into<String>, email: Email, avatar: Option<String>) -> Self {
        Self {
            user_id: UserId::new(),
            name: name.into(),
            email,
            avatar,
            created_at: Utc::now(),
        }
    }
}
