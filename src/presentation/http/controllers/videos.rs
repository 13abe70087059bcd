// src/presentation/http/controllers/videos.rs
use crate::application::{
    commands::videos::{CreateVideoCommand, SetPublishStateCommand, UpdateVideoCommand},
    dto::VideoDto,
    error::ApplicationError,
    ports::media::VideoAssets,
};
use crate::domain::video::VideoId;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::response::ApiResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct CreateVideoRequest {
    pub title: String,
    pub description: String,
    pub duration_secs: i64,
    pub video_path: Option<String>,
    pub thumbnail_path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateVideoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    pub published: bool,
}

fn parse_assets(payload: &CreateVideoRequest) -> Result<VideoAssets, HttpError> {
    let required = |field: Option<&str>, name: &str| {
        field
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::validation(format!("{name} is required")))
            })
    };

    Ok(VideoAssets {
        video_file: required(payload.video_path.as_deref(), "video file")?,
        thumbnail: required(payload.thumbnail_path.as_deref(), "thumbnail")?,
    })
}

pub async fn create_video(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateVideoRequest>,
) -> HttpResult<(StatusCode, Json<ApiResponse<VideoDto>>)> {
    let assets = parse_assets(&payload)?;

    let command = CreateVideoCommand {
        title: payload.title,
        description: payload.description,
        duration_secs: payload.duration_secs,
        owner_id: user.id,
    };

    let video = state
        .services
        .video_commands
        .create(command, assets)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(video, "video uploaded")),
    ))
}

pub async fn get_video_by_slug(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ApiResponse<VideoDto>>> {
    let video = state
        .services
        .video_queries
        .get_by_slug(&slug, viewer.0.as_ref())
        .await
        .into_http()?;

    Ok(Json(ApiResponse::ok(video, "video")))
}

pub async fn update_video(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateVideoRequest>,
) -> HttpResult<Json<ApiResponse<VideoDto>>> {
    let command = UpdateVideoCommand {
        video_id: VideoId::new(id).map_err(|err| HttpError::from_error(err.into()))?,
        title: payload.title,
        description: payload.description,
        actor_id: user.id,
    };

    let video = state
        .services
        .video_commands
        .update(command)
        .await
        .into_http()?;

    Ok(Json(ApiResponse::ok(video, "video updated")))
}

pub async fn set_publish_state(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<PublishRequest>,
) -> HttpResult<Json<ApiResponse<VideoDto>>> {
    let command = SetPublishStateCommand {
        video_id: VideoId::new(id).map_err(|err| HttpError::from_error(err.into()))?,
        published: payload.published,
        actor_id: user.id,
    };

    let video = state
        .services
        .video_commands
        .set_publish_state(command)
        .await
        .into_http()?;

    Ok(Json(ApiResponse::ok(video, "publish state updated")))
}

pub async fn list_my_videos(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ApiResponse<Vec<VideoDto>>>> {
    let videos = state
        .services
        .video_queries
        .list_by_owner(user.id)
        .await
        .into_http()?;

    Ok(Json(ApiResponse::ok(videos, "your videos")))
}
