// src/application/dto/videos.rs
use crate::domain::video::Video;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct VideoDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub duration_secs: i64,
    pub views: i64,
    pub is_published: bool,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Video> for VideoDto {
    fn from(video: Video) -> Self {
        Self {
            id: video.id.into(),
            title: video.title.to_string(),
            slug: video.slug.to_string(),
            description: video.description,
            video_url: video.video_url,
            thumbnail_url: video.thumbnail_url,
            duration_secs: video.duration_secs,
            views: video.views,
            is_published: video.is_published,
            owner_id: video.owner_id.into(),
            created_at: video.created_at,
            updated_at: video.updated_at,
        }
    }
}
