// src/infrastructure/media.rs
use crate::application::{
    ApplicationResult,
    ports::media::{MediaStorage, MediaUrl},
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Media host backed by a locally served directory: assets are moved from
/// their temporary upload path into `media_root` under a random name and
/// addressed under `base_url`. Upload failure is reported as `Ok(None)` so
/// the caller decides whether the asset was mandatory; either way the
/// temporary file is gone afterwards.
pub struct FsMediaStorage {
    media_root: PathBuf,
    base_url: String,
}

impl FsMediaStorage {
    pub fn new(media_root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            media_root: media_root.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn stored_name(local_path: &Path) -> String {
        match local_path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
            None => Uuid::new_v4().to_string(),
        }
    }
}

#[async_trait]
impl MediaStorage for FsMediaStorage {
    async fn upload(&self, local_path: &Path) -> ApplicationResult<Option<MediaUrl>> {
        let name = Self::stored_name(local_path);
        let destination = self.media_root.join(&name);

        let stored = async {
            tokio::fs::create_dir_all(&self.media_root).await?;
            tokio::fs::copy(local_path, &destination).await?;
            Ok::<_, std::io::Error>(())
        }
        .await;

        // The temporary file is removed on both paths; a leftover on the
        // failure path would otherwise accumulate across retries.
        if let Err(err) = tokio::fs::remove_file(local_path).await {
            tracing::warn!(error = %err, path = %local_path.display(), "failed to remove temp upload");
        }

        match stored {
            Ok(()) => Ok(Some(MediaUrl(format!("{}/{name}", self.base_url)))),
            Err(err) => {
                tracing::warn!(error = %err, path = %local_path.display(), "media upload failed");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upload_moves_file_and_returns_public_url() {
        let source_dir = tempfile::tempdir().unwrap();
        let media_dir = tempfile::tempdir().unwrap();
        let source = source_dir.path().join("avatar.png");
        tokio::fs::write(&source, b"png-bytes").await.unwrap();

        let storage = FsMediaStorage::new(media_dir.path(), "https://media.test/");
        let url = storage.upload(&source).await.unwrap().unwrap();

        assert!(url.0.starts_with("https://media.test/"));
        assert!(url.0.ends_with(".png"));
        assert!(!source.exists(), "temp file must be removed after upload");
    }

    #[tokio::test]
    async fn missing_source_reports_failure_not_error() {
        let media_dir = tempfile::tempdir().unwrap();
        let storage = FsMediaStorage::new(media_dir.path(), "https://media.test");
        let result = storage
            .upload(Path::new("/nonexistent/upload.mp4"))
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
