//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entity::identity::Identity;

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
///
/// Missing fields deserialize to empty strings so they surface as field
/// errors rather than a body rejection.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignInRequest {
    #[serde(default)]
    #[validate(email(message = "enter valid email"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "enter a password"))]
    pub password: String,
}

/// Sign in response
#[derive(Debug, Clone, Serialize)]
pub struct SignInResponse {
    pub token: String,
}

// ============================================================================
// Current Identity
// ============================================================================

/// Identity as returned to its owner; never carries credential material
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Identity> for IdentityResponse {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.user_id.to_string(),
            name: identity.name,
            email: identity.email.as_str().to_string(),
            avatar: identity.avatar,
            created_at: identity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_request_validation() {
        let ok: SignInRequest =
            serde_json::from_str(r#"{"email":"a@example.com","password":"pw"}"#).unwrap();
        assert!(ok.validate().is_ok());

        let missing: SignInRequest = serde_json::from_str("{}").unwrap();
        let errors = missing.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_identity_response_shape() {
        let identity = Identity::new(
            "Ada",
            crate::domain::value_object::email::Email::new("ada@example.com").unwrap(),
            None,
        );
        let json = serde_json::to_value(IdentityResponse::from(identity.clone())).unwrap();
        assert_eq!(json["id"], identity.user_id.to_string());
        assert_eq!(json["email"], "ada@example.com");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("password").is_none());
    }
}
