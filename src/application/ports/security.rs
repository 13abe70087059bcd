// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, RefreshClaims},
};
use crate::domain::user::User;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

/// Issues and verifies the two session credentials. Access and refresh
/// tokens are signed with independent secrets and carry independent TTLs.
/// Every verification failure collapses to the same unauthorized error so a
/// caller probing tokens cannot tell expired from forged.
pub trait TokenIssuer: Send + Sync {
    fn issue_access_token(&self, user: &User) -> ApplicationResult<AuthTokenDto>;
    fn issue_refresh_token(&self, user: &User) -> ApplicationResult<AuthTokenDto>;
    fn verify_access(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
    fn verify_refresh(&self, token: &str) -> ApplicationResult<RefreshClaims>;
}
