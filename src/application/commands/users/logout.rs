// src/application/commands/users/logout.rs
use super::UserCommandService;
use crate::application::error::ApplicationResult;
use crate::domain::user::UserId;

pub struct LogoutCommand {
    pub user_id: UserId,
}

impl UserCommandService {
    /// Clearing the stored value is the single revocation mechanism: any
    /// refresh token still in the wild keeps a valid signature but no longer
    /// matches the row, so rotation refuses it.
    pub async fn logout(&self, command: LogoutCommand) -> ApplicationResult<()> {
        self.user_repo
            .set_refresh_token(command.user_id, None)
            .await?;
        Ok(())
    }
}
