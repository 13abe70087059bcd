// src/application/queries/videos.rs
use crate::{
    application::{
        dto::{AuthenticatedUser, VideoDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        user::UserId,
        video::{VideoRepository, VideoSlug},
    },
};
use std::sync::Arc;

pub struct VideoQueryService {
    video_repo: Arc<dyn VideoRepository>,
}

impl VideoQueryService {
    pub fn new(video_repo: Arc<dyn VideoRepository>) -> Self {
        Self { video_repo }
    }

    /// Slug-addressed watch endpoint. Drafts are visible to their owner
    /// only; everyone else sees published videos, and each successful read
    /// bumps the view counter.
    pub async fn get_by_slug(
        &self,
        raw_slug: &str,
        viewer: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<VideoDto> {
        let slug = VideoSlug::new(raw_slug.to_string())?;

        let video = self
            .video_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("video not found"))?;

        let is_owner = viewer.is_some_and(|v| v.id == video.owner_id);
        if !video.is_published && !is_owner {
            return Err(ApplicationError::not_found("video not found"));
        }

        self.video_repo.increment_views(video.id).await?;

        Ok(video.into())
    }

    pub async fn list_by_owner(&self, owner_id: UserId) -> ApplicationResult<Vec<VideoDto>> {
        let videos = self.video_repo.list_by_owner(owner_id).await?;
        Ok(videos.into_iter().map(VideoDto::from).collect())
    }
}
