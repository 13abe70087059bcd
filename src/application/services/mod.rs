// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{users::UserCommandService, videos::VideoCommandService},
        ports::{
            media::MediaStorage,
            security::{PasswordHasher, TokenIssuer},
            time::Clock,
            util::SlugGenerator,
        },
        queries::{UserQueryService, VideoQueryService},
    },
    domain::{
        user::UserRepository,
        video::{VideoRepository, services::VideoSlugService},
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub video_commands: Arc<VideoCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub video_queries: Arc<VideoQueryService>,
    token_issuer: Arc<dyn TokenIssuer>,
    user_repo: Arc<dyn UserRepository>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        video_repo: Arc<dyn VideoRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_issuer: Arc<dyn TokenIssuer>,
        media_storage: Arc<dyn MediaStorage>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_issuer),
            Arc::clone(&media_storage),
            Arc::clone(&clock),
        ));

        let slug_service = Arc::new(VideoSlugService::new(
            Arc::clone(&video_repo),
            Arc::clone(&slugger),
        ));

        let video_commands = Arc::new(VideoCommandService::new(
            Arc::clone(&video_repo),
            Arc::clone(&slug_service),
            Arc::clone(&media_storage),
            Arc::clone(&clock),
        ));

        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));
        let video_queries = Arc::new(VideoQueryService::new(Arc::clone(&video_repo)));

        Self {
            user_commands,
            video_commands,
            user_queries,
            video_queries,
            token_issuer,
            user_repo,
        }
    }

    pub fn token_issuer(&self) -> Arc<dyn TokenIssuer> {
        Arc::clone(&self.token_issuer)
    }

    /// Per-request authentication used by the extractor: verify the access
    /// token, then confirm the principal still exists. Both failure modes
    /// collapse to the same unauthorized error.
    pub async fn authenticate(
        &self,
        token: &str,
    ) -> crate::application::ApplicationResult<crate::application::dto::AuthenticatedUser> {
        use crate::application::error::ApplicationError;

        let auth = self.token_issuer.verify_access(token)?;

        self.user_repo
            .find_by_id(auth.id)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "principal lookup failed during authentication");
                ApplicationError::unauthorized("invalid access token")
            })?
            .ok_or_else(|| ApplicationError::unauthorized("invalid access token"))?;

        Ok(auth)
    }
}
