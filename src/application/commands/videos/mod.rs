// src/application/commands/videos/mod.rs
mod create;
mod publish;
mod update;

pub use create::CreateVideoCommand;
pub use publish::SetPublishStateCommand;
pub use update::UpdateVideoCommand;

use crate::application::ports::{media::MediaStorage, time::Clock};
use crate::domain::video::{VideoRepository, services::VideoSlugService};
use std::sync::Arc;

/// Attempts at writing a row with a freshly derived slug before giving up.
/// Each retry bumps the counter suffix, so exhaustion means something is
/// pathologically hot-titled.
const MAX_SLUG_ATTEMPTS: u64 = 5;

pub struct VideoCommandService {
    video_repo: Arc<dyn VideoRepository>,
    slug_service: Arc<VideoSlugService>,
    media_storage: Arc<dyn MediaStorage>,
    clock: Arc<dyn Clock>,
}

impl VideoCommandService {
    pub fn new(
        video_repo: Arc<dyn VideoRepository>,
        slug_service: Arc<VideoSlugService>,
        media_storage: Arc<dyn MediaStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            video_repo,
            slug_service,
            media_storage,
            clock,
        }
    }
}
