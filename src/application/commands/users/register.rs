// src/application/commands/users/register.rs
use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
        ports::media::{MediaUrl, UploadedAssets},
    },
    domain::user::{Email, NewUser, PasswordHash, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
}

impl UserCommandService {
    /// Admit a new principal. No session is established here; the caller has
    /// to log in afterwards. Uploads run before the insert so a failed or
    /// cancelled upload can never leave a half-created account behind.
    pub async fn register(
        &self,
        command: RegisterUserCommand,
        assets: UploadedAssets,
    ) -> ApplicationResult<UserDto> {
        let (username, email, full_name) = Self::validate_input(&command)?;

        self.ensure_identity_available(&username, &email).await?;

        let (avatar_url, cover_image_url) = self.upload_assets(&assets).await?;

        let user = self
            .create_and_insert_user(
                username,
                email,
                &command.password,
                full_name,
                avatar_url,
                cover_image_url,
            )
            .await?;

        Ok(user.into())
    }

    fn validate_input(
        command: &RegisterUserCommand,
    ) -> ApplicationResult<(Username, Email, String)> {
        if command.full_name.trim().is_empty() {
            return Err(ApplicationError::validation("full name cannot be empty"));
        }
        validate_password(&command.password)?;

        let username = Username::new(command.username.clone())?;
        let email = Email::new(command.email.clone())?;

        Ok((username, email, command.full_name.trim().to_string()))
    }

    /// User-facing fast path only. The database uniqueness constraints are
    /// the authoritative guard; a constraint violation on the insert is
    /// mapped to the same duplicate-identity conflict.
    async fn ensure_identity_available(
        &self,
        username: &Username,
        email: &Email,
    ) -> ApplicationResult<()> {
        if self
            .user_repo
            .exists_by_username_or_email(username, email)
            .await?
        {
            return Err(ApplicationError::conflict(
                "a user with this username or email already exists",
            ));
        }
        Ok(())
    }

    async fn upload_assets(
        &self,
        assets: &UploadedAssets,
    ) -> ApplicationResult<(String, Option<String>)> {
        let avatar = self.media_storage.upload(&assets.avatar).await?;

        let cover_image = match assets.cover_image.as_deref() {
            Some(path) => self.media_storage.upload(path).await?,
            None => None,
        };

        // The avatar is mandatory; a lost upload is the host's fault, not a
        // client error, so surface it as an infrastructure failure.
        let Some(MediaUrl(avatar_url)) = avatar else {
            return Err(ApplicationError::infrastructure(
                "avatar upload failed; please try registering again",
            ));
        };

        Ok((avatar_url, cover_image.map(|MediaUrl(url)| url)))
    }

    async fn create_and_insert_user(
        &self,
        username: Username,
        email: Email,
        password: &str,
        full_name: String,
        avatar_url: String,
        cover_image_url: Option<String>,
    ) -> ApplicationResult<crate::domain::user::User> {
        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let created_at = self.clock.now();
        let new_user = NewUser::new(
            username,
            email,
            password_hash,
            full_name,
            avatar_url,
            cover_image_url,
            created_at,
        );

        let user = self.user_repo.insert(new_user).await?;
        Ok(user)
    }
}
