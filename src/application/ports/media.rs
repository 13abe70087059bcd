// src/application/ports/media.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Public URL of a stored asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUrl(pub String);

/// Remote media host boundary. Implementations must remove the local
/// temporary file whether the upload succeeds or fails, and report upload
/// failure as `Ok(None)` so the caller decides whether the asset was
/// mandatory.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    async fn upload(&self, local_path: &Path) -> ApplicationResult<Option<MediaUrl>>;
}

/// Validated upload descriptors for registration, checked once at the HTTP
/// boundary. A missing mandatory field never reaches the core.
#[derive(Debug, Clone)]
pub struct UploadedAssets {
    pub avatar: PathBuf,
    pub cover_image: Option<PathBuf>,
}

/// Upload descriptors for video creation; both assets are mandatory.
#[derive(Debug, Clone)]
pub struct VideoAssets {
    pub video_file: PathBuf,
    pub thumbnail: PathBuf,
}
