// src/domain/video/services.rs
use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::video::repository::VideoRepository;
use crate::domain::video::value_objects::{VideoId, VideoSlug, VideoTitle};

/// Domain service responsible for producing unique slugs for videos.
///
/// The probe loop here is only the fast path: under concurrent creation two
/// callers can both see a candidate as free. The `videos.slug` uniqueness
/// constraint stays authoritative, and the command layer retries with the
/// next counter suffix when the insert loses that race.
pub struct VideoSlugService {
    repo: Arc<dyn VideoRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl VideoSlugService {
    pub fn new(repo: Arc<dyn VideoRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, generator }
    }

    /// Derive the base slug for a title, falling back to a timestamped name
    /// when transliteration leaves nothing usable.
    pub fn base_slug(&self, title: &VideoTitle) -> String {
        let base = self.generator.slugify(title.as_str());
        if base.is_empty() {
            format!("video-{}", Utc::now().timestamp())
        } else {
            base
        }
    }

    /// Candidate for a given retry attempt: the base slug itself first, then
    /// `{base}-1`, `{base}-2`, ...
    pub fn candidate(base: &str, attempt: u64) -> DomainResult<VideoSlug> {
        if attempt == 0 {
            VideoSlug::new(base)
        } else {
            VideoSlug::new(format!("{base}-{attempt}"))
        }
    }

    pub async fn generate_unique_slug(
        &self,
        title: &VideoTitle,
        ignore_id: Option<VideoId>,
    ) -> DomainResult<VideoSlug> {
        let base = self.base_slug(title);

        let mut attempt = 0u64;
        loop {
            let slug = Self::candidate(&base, attempt)?;
            match self.repo.find_by_slug(&slug).await? {
                // The resource already owns this slug; keep it so re-running
                // allocation for an unchanged title is a no-op.
                Some(existing) if ignore_id.is_some_and(|id| id == existing.id) => {
                    return Ok(slug);
                }
                Some(_) => attempt += 1,
                None => return Ok(slug),
            }
        }
    }
}
