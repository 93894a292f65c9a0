//! Current Identity Use Case
//!
//! Resolves the identity behind an authenticated request.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::identity::Identity;
use crate::domain::repository::IdentityRepository;
use crate::error::{AuthError, AuthResult};

pub struct CurrentIdentityUseCase<I>
where
    I: IdentityRepository,
{
    identity_repo: Arc<I>,
}

impl<I> CurrentIdentityUseCase<I>
where
    I: IdentityRepository,
{
    pub fn new(identity_repo: Arc<I>) -> Self {
        Self { identity_repo }
    }

    /// A valid token whose identity has since disappeared is `UnknownSubject`.
    pub async fn execute(&self, user_id: &UserId) -> AuthResult<Identity> {
        self.identity_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UnknownSubject)
    }
}
