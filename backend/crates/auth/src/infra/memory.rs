//! In-memory Repository Implementations
//!
//! Used by tests and by the server when no `DATABASE_URL` is configured.
//! Data is lost on restart.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::UserId;
use tokio::sync::RwLock;

use crate::domain::entity::{credential::Credential, identity::Identity};
use crate::domain::repository::{CredentialRepository, IdentityRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Tables {
    identities: HashMap<UserId, Identity>,
    credentials: HashMap<UserId, Credential>,
}

/// In-memory identity/credential repository
///
/// Cloning shares the same underlying tables.
#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityRepository for InMemoryAuthRepository {
    async fn create(&self, identity: &Identity, credential: &Credential) -> AuthResult<()> {
        let mut tables = self.tables.write().await;

        if tables
            .identities
            .values()
            .any(|existing| existing.email == identity.email)
        {
            return Err(AuthError::Internal(format!(
                "email already registered: {}",
                identity.email
            )));
        }

        tables.identities.insert(identity.user_id, identity.clone());
        tables
            .credentials
            .insert(credential.user_id, credential.clone());

        tracing::debug!(user_id = %identity.user_id, "Stored identity in memory");
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<Identity>> {
        Ok(self.tables.read().await.identities.get(user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Identity>> {
        Ok(self
            .tables
            .read()
            .await
            .identities
            .values()
            .find(|identity| &identity.email == email)
            .cloned())
    }
}

impl CredentialRepository for InMemoryAuthRepository {
    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Credential>> {
        Ok(self.tables.read().await.credentials.get(user_id).cloned())
    }
}
