// src/application/commands/users/refresh.rs
use super::{UserCommandService, login::LoginResult};
use crate::application::error::{ApplicationError, ApplicationResult};

pub struct RefreshSessionCommand {
    pub token: String,
}

impl UserCommandService {
    /// Rotate a session. The presented token must carry a valid signature,
    /// be unexpired, and match the value currently stored on the principal
    /// row. A cryptographically valid token whose stored counterpart was
    /// cleared or replaced is revoked, not retryable.
    pub async fn refresh(&self, command: RefreshSessionCommand) -> ApplicationResult<LoginResult> {
        let claims = self.token_issuer.verify_refresh(&command.token)?;

        let user = self
            .user_repo
            .find_by_id(claims.id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid refresh token"))?;

        if user.refresh_token.as_deref() != Some(command.token.as_str()) {
            return Err(ApplicationError::unauthorized("invalid refresh token"));
        }

        let (access, refresh) = self.establish_session(&user).await?;

        Ok(LoginResult {
            access,
            refresh,
            user: user.into(),
        })
    }
}
