// src/infrastructure/repositories/postgres_video.rs
use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use crate::domain::video::{
    NewVideo, Video, VideoId, VideoRepository, VideoSlug, VideoTitle, VideoUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresVideoRepository {
    pool: PgPool,
}

impl PostgresVideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct VideoRow {
    id: i64,
    title: String,
    slug: String,
    description: String,
    video_url: String,
    thumbnail_url: String,
    duration_secs: i64,
    views: i64,
    is_published: bool,
    owner_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<VideoRow> for Video {
    type Error = DomainError;

    fn try_from(row: VideoRow) -> Result<Self, Self::Error> {
        Ok(Video {
            id: VideoId::new(row.id)?,
            title: VideoTitle::new(row.title)?,
            slug: VideoSlug::new(row.slug)?,
            description: row.description,
            video_url: row.video_url,
            thumbnail_url: row.thumbnail_url,
            duration_secs: row.duration_secs,
            views: row.views,
            is_published: row.is_published,
            owner_id: UserId::new(row.owner_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const VIDEO_COLUMNS: &str = "id, title, slug, description, video_url, thumbnail_url, \
     duration_secs, views, is_published, owner_id, created_at, updated_at";

#[async_trait]
impl VideoRepository for PostgresVideoRepository {
    async fn insert(&self, new_video: NewVideo) -> DomainResult<Video> {
        let NewVideo {
            title,
            slug,
            description,
            video_url,
            thumbnail_url,
            duration_secs,
            owner_id,
            created_at,
        } = new_video;

        let row = sqlx::query_as::<_, VideoRow>(&format!(
            "INSERT INTO videos (title, slug, description, video_url, thumbnail_url, \
             duration_secs, owner_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
             RETURNING {VIDEO_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(&description)
        .bind(&video_url)
        .bind(&thumbnail_url)
        .bind(duration_secs)
        .bind(i64::from(owner_id))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Video::try_from(row)
    }

    async fn find_by_id(&self, id: VideoId) -> DomainResult<Option<Video>> {
        let row = sqlx::query_as::<_, VideoRow>(&format!(
            "SELECT {VIDEO_COLUMNS} FROM videos WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Video::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &VideoSlug) -> DomainResult<Option<Video>> {
        let row = sqlx::query_as::<_, VideoRow>(&format!(
            "SELECT {VIDEO_COLUMNS} FROM videos WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Video::try_from).transpose()
    }

    async fn update_metadata(&self, update: VideoUpdate) -> DomainResult<Video> {
        let row = sqlx::query_as::<_, VideoRow>(&format!(
            "UPDATE videos SET
                 title = COALESCE($2, title),
                 slug = COALESCE($3, slug),
                 description = COALESCE($4, description),
                 updated_at = now()
             WHERE id = $1
             RETURNING {VIDEO_COLUMNS}"
        ))
        .bind(i64::from(update.id))
        .bind(update.title.as_ref().map(VideoTitle::as_str))
        .bind(update.slug.as_ref().map(VideoSlug::as_str))
        .bind(update.description.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("video not found".into()))?;

        Video::try_from(row)
    }

    async fn set_publish_state(&self, id: VideoId, published: bool) -> DomainResult<Video> {
        let row = sqlx::query_as::<_, VideoRow>(&format!(
            "UPDATE videos SET is_published = $2, updated_at = now()
             WHERE id = $1
             RETURNING {VIDEO_COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(published)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("video not found".into()))?;

        Video::try_from(row)
    }

    async fn increment_views(&self, id: VideoId) -> DomainResult<()> {
        sqlx::query("UPDATE videos SET views = views + 1 WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn list_by_owner(&self, owner_id: UserId) -> DomainResult<Vec<Video>> {
        let rows = sqlx::query_as::<_, VideoRow>(&format!(
            "SELECT {VIDEO_COLUMNS} FROM videos WHERE owner_id = $1 ORDER BY created_at DESC"
        ))
        .bind(i64::from(owner_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Video::try_from).collect()
    }
}
