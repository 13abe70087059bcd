// src/application/commands/videos/update.rs
use super::{MAX_SLUG_ATTEMPTS, VideoCommandService};
use crate::{
    application::{
        dto::VideoDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        user::UserId,
        video::{VideoId, VideoTitle, VideoUpdate},
    },
};

pub struct UpdateVideoCommand {
    pub video_id: VideoId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub actor_id: UserId,
}

impl VideoCommandService {
    /// The slug is recomputed only when the title actually changes; editing
    /// the description alone leaves it untouched.
    pub async fn update(&self, command: UpdateVideoCommand) -> ApplicationResult<VideoDto> {
        let video = self
            .video_repo
            .find_by_id(command.video_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("video not found"))?;

        if video.owner_id != command.actor_id {
            return Err(ApplicationError::forbidden(
                "only the owner can edit this video",
            ));
        }

        let mut update = VideoUpdate::new(video.id);

        if let Some(description) = command.description {
            if description.trim().is_empty() {
                return Err(ApplicationError::validation("description cannot be empty"));
            }
            update = update.with_description(description.trim().to_string());
        }

        let retitled = match command.title {
            Some(raw) => {
                let title = VideoTitle::new(raw)?;
                if title == video.title {
                    None
                } else {
                    Some(title)
                }
            }
            None => None,
        };

        let Some(title) = retitled else {
            let updated = self.video_repo.update_metadata(update).await?;
            return Ok(updated.into());
        };

        self.update_with_new_slug(update, title).await
    }

    /// Same constraint-plus-retry discipline as creation: the probe picks a
    /// candidate, the unique constraint arbitrates, and a loss recomputes
    /// with the next suffix.
    async fn update_with_new_slug(
        &self,
        update: VideoUpdate,
        title: VideoTitle,
    ) -> ApplicationResult<VideoDto> {
        let base = self.slug_service.base_slug(&title);

        let mut slug = self
            .slug_service
            .generate_unique_slug(&title, Some(update.id))
            .await?;

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let patch = update.clone().with_title(title.clone(), slug.clone());
            match self.video_repo.update_metadata(patch).await {
                Ok(video) => return Ok(video.into()),
                Err(DomainError::Conflict(_)) if attempt < MAX_SLUG_ATTEMPTS => {
                    tracing::debug!(%base, attempt, "slug taken under race, retrying");
                    slug = crate::domain::video::services::VideoSlugService::candidate(
                        &base, attempt,
                    )?;
                }
                Err(DomainError::Conflict(_)) => {
                    return Err(ApplicationError::conflict("could not allocate slug"));
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(ApplicationError::conflict("could not allocate slug"))
    }
}
