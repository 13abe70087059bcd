// src/application/commands/users/login.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, User, Username},
};

pub struct LoginUserCommand {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginResult {
    pub access: AuthTokenDto,
    pub refresh: AuthTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let (username, email) = Self::parse_lookup_keys(&command)?;

        let user = self
            .find_and_authenticate_user(username, email, &command.password)
            .await?;

        let (access, refresh) = self.establish_session(&user).await?;

        Ok(LoginResult {
            access,
            refresh,
            user: user.into(),
        })
    }

    fn parse_lookup_keys(
        command: &LoginUserCommand,
    ) -> ApplicationResult<(Option<Username>, Option<Email>)> {
        let username = command
            .username
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .map(Username::new)
            .transpose()?;
        let email = command
            .email
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .map(Email::new)
            .transpose()?;

        if username.is_none() && email.is_none() {
            return Err(ApplicationError::validation(
                "username or email is required",
            ));
        }

        Ok((username, email))
    }

    /// Unknown principal and wrong password must be indistinguishable to the
    /// caller, so both paths end in the same error.
    async fn find_and_authenticate_user(
        &self,
        username: Option<Username>,
        email: Option<Email>,
        password: &str,
    ) -> ApplicationResult<User> {
        let user = self
            .user_repo
            .find_by_username_or_email(username.as_ref(), email.as_ref())
            .await?
            .ok_or_else(ApplicationError::invalid_credentials)?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(_) => ApplicationError::invalid_credentials(),
                other => other,
            })?;

        Ok(user)
    }

    /// Issue both tokens and persist the refresh-token value on the row.
    /// The stored value is what makes the refresh token revocable later.
    pub(super) async fn establish_session(
        &self,
        user: &User,
    ) -> ApplicationResult<(AuthTokenDto, AuthTokenDto)> {
        let access = self.token_issuer.issue_access_token(user)?;
        let refresh = self.token_issuer.issue_refresh_token(user)?;

        self.user_repo
            .set_refresh_token(user.id, Some(&refresh.token))
            .await?;

        Ok((access, refresh))
    }
}
