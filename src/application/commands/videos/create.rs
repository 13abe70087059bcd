// src/application/commands/videos/create.rs
use super::{MAX_SLUG_ATTEMPTS, VideoCommandService};
use crate::{
    application::{
        dto::VideoDto,
        error::{ApplicationError, ApplicationResult},
        ports::media::{MediaUrl, VideoAssets},
    },
    domain::{
        errors::DomainError,
        user::UserId,
        video::{NewVideo, VideoTitle, services::VideoSlugService},
    },
};

pub struct CreateVideoCommand {
    pub title: String,
    pub description: String,
    pub duration_secs: i64,
    pub owner_id: UserId,
}

impl VideoCommandService {
    pub async fn create(
        &self,
        command: CreateVideoCommand,
        assets: VideoAssets,
    ) -> ApplicationResult<VideoDto> {
        let title = VideoTitle::new(command.title)?;
        if command.description.trim().is_empty() {
            return Err(ApplicationError::validation("description cannot be empty"));
        }
        if command.duration_secs <= 0 {
            return Err(ApplicationError::validation("duration must be positive"));
        }

        let (video_url, thumbnail_url) = self.upload_assets(&assets).await?;

        let video = self
            .insert_with_unique_slug(&title, |slug| NewVideo {
                title: title.clone(),
                slug,
                description: command.description.trim().to_string(),
                video_url: video_url.clone(),
                thumbnail_url: thumbnail_url.clone(),
                duration_secs: command.duration_secs,
                owner_id: command.owner_id,
                created_at: self.clock.now(),
            })
            .await?;

        Ok(video.into())
    }

    async fn upload_assets(&self, assets: &VideoAssets) -> ApplicationResult<(String, String)> {
        let video = self.media_storage.upload(&assets.video_file).await?;
        let thumbnail = self.media_storage.upload(&assets.thumbnail).await?;

        let (Some(MediaUrl(video_url)), Some(MediaUrl(thumbnail_url))) = (video, thumbnail) else {
            return Err(ApplicationError::infrastructure(
                "media upload failed; please try again",
            ));
        };

        Ok((video_url, thumbnail_url))
    }

    /// Two concurrent creations with the same title can both pass the probe
    /// loop and collide on the slug column. The unique constraint decides the
    /// winner; the loser recomputes with the next counter suffix and retries
    /// up to a fixed limit. The slug column carries the only unique
    /// constraint on the videos table, so any conflict here is a slug race.
    pub(super) async fn insert_with_unique_slug<F>(
        &self,
        title: &VideoTitle,
        make_new_video: F,
    ) -> ApplicationResult<crate::domain::video::Video>
    where
        F: Fn(crate::domain::video::VideoSlug) -> NewVideo,
    {
        let slug = self.slug_service.generate_unique_slug(title, None).await?;
        let base = self.slug_service.base_slug(title);

        let mut candidate = slug;
        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            match self.video_repo.insert(make_new_video(candidate)).await {
                Ok(video) => return Ok(video),
                Err(DomainError::Conflict(_)) if attempt < MAX_SLUG_ATTEMPTS => {
                    tracing::debug!(%base, attempt, "slug taken under race, retrying");
                    candidate = self
                        .next_free_candidate(&base, attempt)
                        .await?
                        .ok_or_else(|| ApplicationError::conflict("could not allocate slug"))?;
                }
                Err(DomainError::Conflict(_)) => {
                    return Err(ApplicationError::conflict("could not allocate slug"));
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(ApplicationError::conflict("could not allocate slug"))
    }

    async fn next_free_candidate(
        &self,
        base: &str,
        from_attempt: u64,
    ) -> ApplicationResult<Option<crate::domain::video::VideoSlug>> {
        for attempt in from_attempt..from_attempt + MAX_SLUG_ATTEMPTS {
            let slug = VideoSlugService::candidate(base, attempt)?;
            if self.video_repo.find_by_slug(&slug).await?.is_none() {
                return Ok(Some(slug));
            }
        }
        Ok(None)
    }
}
