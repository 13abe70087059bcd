// src/domain/video/entity.rs
use crate::domain::user::UserId;
use crate::domain::video::value_objects::{VideoId, VideoSlug, VideoTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Video {
    pub id: VideoId,
    pub title: VideoTitle,
    pub slug: VideoSlug,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub duration_secs: i64,
    pub views: i64,
    pub is_published: bool,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewVideo {
    pub title: VideoTitle,
    pub slug: VideoSlug,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub duration_secs: i64,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Metadata patch. `slug` is set only when the title changed; an unchanged
/// title keeps the existing slug untouched.
#[derive(Debug, Clone)]
pub struct VideoUpdate {
    pub id: VideoId,
    pub title: Option<VideoTitle>,
    pub slug: Option<VideoSlug>,
    pub description: Option<String>,
}

impl VideoUpdate {
    pub fn new(id: VideoId) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            description: None,
        }
    }

    pub fn with_title(mut self, title: VideoTitle, slug: VideoSlug) -> Self {
        self.title = Some(title);
        self.slug = Some(slug);
        self
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }
}
