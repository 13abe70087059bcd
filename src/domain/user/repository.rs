// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::entity::{NewUser, User};
use crate::domain::user::value_objects::{Email, UserId, Username};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    /// Matches when either supplied key equals the stored, normalized field.
    /// Callers must supply at least one key.
    async fn find_by_username_or_email(
        &self,
        username: Option<&Username>,
        email: Option<&Email>,
    ) -> DomainResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    /// Fast-path pre-check only. The database uniqueness constraints on both
    /// columns remain the authoritative guard under concurrent registration.
    async fn exists_by_username_or_email(
        &self,
        username: &Username,
        email: &Email,
    ) -> DomainResult<bool>;

    /// Overwrites the stored refresh-token value. `None` revokes the active
    /// long-lived session for the principal.
    async fn set_refresh_token(&self, id: UserId, token: Option<&str>) -> DomainResult<()>;
}
