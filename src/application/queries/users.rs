// src/application/queries/users.rs
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserRepository,
};
use std::sync::Arc;

pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Profile of the authenticated caller, re-read from the store so the
    /// response reflects current data rather than token-time snapshots.
    pub async fn current_user(&self, auth: &AuthenticatedUser) -> ApplicationResult<UserDto> {
        let user = self
            .user_repo
            .find_by_id(auth.id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("account no longer exists"))?;

        Ok(user.into())
    }
}
