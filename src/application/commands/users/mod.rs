// src/application/commands/users/mod.rs
mod login;
mod logout;
mod password;
mod refresh;
mod register;

pub use login::{LoginResult, LoginUserCommand};
pub use logout::LogoutCommand;
pub use refresh::RefreshSessionCommand;
pub use register::RegisterUserCommand;

use crate::application::ports::{
    media::MediaStorage,
    security::{PasswordHasher, TokenIssuer},
    time::Clock,
};
use crate::domain::user::UserRepository;
use std::sync::Arc;

pub struct UserCommandService {
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_issuer: Arc<dyn TokenIssuer>,
    media_storage: Arc<dyn MediaStorage>,
    clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_issuer: Arc<dyn TokenIssuer>,
        media_storage: Arc<dyn MediaStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_issuer,
            media_storage,
            clock,
        }
    }
}
