//! Author Directory backed by the auth crate's identities

use std::sync::Arc;

use auth::domain::IdentityRepository;
use kernel::id::UserId;

use crate::domain::repository::AuthorDirectory;
use crate::domain::value_objects::Author;
use crate::error::PostResult;

/// Resolves authors through an identity repository
pub struct IdentityAuthorDirectory<I> {
    identities: Arc<I>,
}

impl<I> IdentityAuthorDirectory<I> {
    pub fn new(identities: Arc<I>) -> Self {
        Self { identities }
    }
}

impl<I> Clone for IdentityAuthorDirectory<I> {
    fn clone(&self) -> Self {
        Self {
            identities: self.identities.clone(),
        }
    }
}

impl<I> AuthorDirectory for IdentityAuthorDirectory<I>
where
    I: IdentityRepository + Send + Sync,
{
    async fn find_author(&self, user_id: &UserId) -> PostResult<Option<Author>> {
        let identity = self.identities.find_by_id(user_id).await?;

        Ok(identity.map(|identity| Author {
            user_id: identity.user_id,
            name: identity.name,
            avatar: identity.avatar,
        }))
    }
}
