// src/domain/video/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use crate::domain::video::entity::{NewVideo, Video, VideoUpdate};
use crate::domain::video::value_objects::{VideoId, VideoSlug};
use async_trait::async_trait;

#[async_trait]
pub trait VideoRepository: Send + Sync {
    async fn insert(&self, new_video: NewVideo) -> DomainResult<Video>;

    async fn find_by_id(&self, id: VideoId) -> DomainResult<Option<Video>>;

    async fn find_by_slug(&self, slug: &VideoSlug) -> DomainResult<Option<Video>>;

    async fn update_metadata(&self, update: VideoUpdate) -> DomainResult<Video>;

    async fn set_publish_state(&self, id: VideoId, published: bool) -> DomainResult<Video>;

    /// Engagement counter bump; single-row update.
    async fn increment_views(&self, id: VideoId) -> DomainResult<()>;

    async fn list_by_owner(&self, owner_id: UserId) -> DomainResult<Vec<Video>>;
}
