use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use vidhive::application::ports::media::{MediaStorage, MediaUrl};
use vidhive::application::ports::time::Clock;
use vidhive::application::ports::util::SlugGenerator;
use vidhive::application::{ApplicationResult, services::ApplicationServices};
use vidhive::domain::errors::{DomainError, DomainResult};
use vidhive::domain::user::{
    Email, NewUser, User, UserId, UserRepository, Username,
};
use vidhive::domain::video::{
    NewVideo, Video, VideoId, VideoRepository, VideoSlug, VideoUpdate,
};
use vidhive::infrastructure::security::password::Argon2PasswordHasher;
use vidhive::infrastructure::security::token::JwtTokenIssuer;

/// In-memory user store mirroring the database's behavior, including the
/// uniqueness constraints on username and email: the insert itself is the
/// authoritative guard, exactly like the real schema.
#[derive(Default)]
pub struct InMemoryUserRepo {
    inner: Mutex<UserStore>,
}

#[derive(Default)]
struct UserStore {
    users: HashMap<i64, User>,
    next_id: i64,
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut store = self.inner.lock().unwrap();

        let duplicate = store.users.values().any(|u| {
            u.username == new_user.username || u.email == new_user.email
        });
        if duplicate {
            return Err(DomainError::Conflict(
                "a user with this username or email already exists".into(),
            ));
        }

        store.next_id += 1;
        let user = User {
            id: UserId::new(store.next_id)?,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            full_name: new_user.full_name,
            avatar_url: new_user.avatar_url,
            cover_image_url: new_user.cover_image_url,
            refresh_token: None,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        let id = store.next_id;
        store.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_username_or_email(
        &self,
        username: Option<&Username>,
        email: Option<&Email>,
    ) -> DomainResult<Option<User>> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .users
            .values()
            .find(|u| {
                username.is_some_and(|name| &u.username == name)
                    || email.is_some_and(|mail| &u.email == mail)
            })
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let store = self.inner.lock().unwrap();
        Ok(store.users.get(&i64::from(id)).cloned())
    }

    async fn exists_by_username_or_email(
        &self,
        username: &Username,
        email: &Email,
    ) -> DomainResult<bool> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .users
            .values()
            .any(|u| &u.username == username || &u.email == email))
    }

    async fn set_refresh_token(&self, id: UserId, token: Option<&str>) -> DomainResult<()> {
        let mut store = self.inner.lock().unwrap();
        let user = store
            .users
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.refresh_token = token.map(str::to_string);
        Ok(())
    }
}

impl InMemoryUserRepo {
    pub fn stored_refresh_token(&self, id: UserId) -> Option<String> {
        let store = self.inner.lock().unwrap();
        store
            .users
            .get(&i64::from(id))
            .and_then(|u| u.refresh_token.clone())
    }
}

/// In-memory video store with the slug uniqueness constraint enforced at
/// write time, like the real `videos_slug_key`.
#[derive(Default)]
pub struct InMemoryVideoRepo {
    inner: Mutex<VideoStore>,
}

#[derive(Default)]
struct VideoStore {
    videos: HashMap<i64, Video>,
    next_id: i64,
}

impl VideoStore {
    fn slug_taken_by_other(&self, slug: &VideoSlug, id: Option<VideoId>) -> bool {
        self.videos
            .values()
            .any(|v| &v.slug == slug && id.is_none_or(|keep| v.id != keep))
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepo {
    async fn insert(&self, new_video: NewVideo) -> DomainResult<Video> {
        let mut store = self.inner.lock().unwrap();

        if store.slug_taken_by_other(&new_video.slug, None) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        store.next_id += 1;
        let video = Video {
            id: VideoId::new(store.next_id)?,
            title: new_video.title,
            slug: new_video.slug,
            description: new_video.description,
            video_url: new_video.video_url,
            thumbnail_url: new_video.thumbnail_url,
            duration_secs: new_video.duration_secs,
            views: 0,
            is_published: false,
            owner_id: new_video.owner_id,
            created_at: new_video.created_at,
            updated_at: new_video.created_at,
        };
        let id = store.next_id;
        store.videos.insert(id, video.clone());
        Ok(video)
    }

    async fn find_by_id(&self, id: VideoId) -> DomainResult<Option<Video>> {
        let store = self.inner.lock().unwrap();
        Ok(store.videos.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &VideoSlug) -> DomainResult<Option<Video>> {
        let store = self.inner.lock().unwrap();
        Ok(store.videos.values().find(|v| &v.slug == slug).cloned())
    }

    async fn update_metadata(&self, update: VideoUpdate) -> DomainResult<Video> {
        let mut store = self.inner.lock().unwrap();

        if let Some(slug) = &update.slug {
            if store.slug_taken_by_other(slug, Some(update.id)) {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }

        let video = store
            .videos
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("video not found".into()))?;

        if let Some(title) = update.title {
            video.title = title;
        }
        if let Some(slug) = update.slug {
            video.slug = slug;
        }
        if let Some(description) = update.description {
            video.description = description;
        }
        Ok(video.clone())
    }

    async fn set_publish_state(&self, id: VideoId, published: bool) -> DomainResult<Video> {
        let mut store = self.inner.lock().unwrap();
        let video = store
            .videos
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("video not found".into()))?;
        video.is_published = published;
        Ok(video.clone())
    }

    async fn increment_views(&self, id: VideoId) -> DomainResult<()> {
        let mut store = self.inner.lock().unwrap();
        let video = store
            .videos
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("video not found".into()))?;
        video.views += 1;
        Ok(())
    }

    async fn list_by_owner(&self, owner_id: UserId) -> DomainResult<Vec<Video>> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .videos
            .values()
            .filter(|v| v.owner_id == owner_id)
            .cloned()
            .collect())
    }
}

#[derive(Clone)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Media host fake: any path containing "broken" fails its upload, mirroring
/// the real storage's failure-is-`None` contract.
#[derive(Default)]
pub struct FakeMediaStorage {
    pub uploads: Mutex<Vec<PathBuf>>,
}

#[async_trait]
impl MediaStorage for FakeMediaStorage {
    async fn upload(&self, local_path: &Path) -> ApplicationResult<Option<MediaUrl>> {
        self.uploads.lock().unwrap().push(local_path.to_path_buf());
        if local_path.to_string_lossy().contains("broken") {
            return Ok(None);
        }
        Ok(Some(MediaUrl(format!(
            "https://media.test/{}",
            local_path.file_name().unwrap().to_string_lossy()
        ))))
    }
}

pub struct SlugCrateGenerator;

impl SlugGenerator for SlugCrateGenerator {
    fn slugify(&self, input: &str) -> String {
        slug::slugify(input)
    }
}

pub struct TestHarness {
    pub services: Arc<ApplicationServices>,
    pub user_repo: Arc<InMemoryUserRepo>,
    pub video_repo: Arc<InMemoryVideoRepo>,
    pub token_issuer: Arc<JwtTokenIssuer>,
}

pub fn harness() -> TestHarness {
    let user_repo = Arc::new(InMemoryUserRepo::default());
    let video_repo = Arc::new(InMemoryVideoRepo::default());
    let token_issuer = Arc::new(JwtTokenIssuer::new(
        b"test-access-secret",
        b"test-refresh-secret",
        Duration::from_secs(900),
        Duration::from_secs(86_400),
    ));

    let services = Arc::new(ApplicationServices::new(
        user_repo.clone(),
        video_repo.clone(),
        Arc::new(Argon2PasswordHasher::default()),
        token_issuer.clone(),
        Arc::new(FakeMediaStorage::default()),
        Arc::new(FixedClock(Utc::now())),
        Arc::new(SlugCrateGenerator),
    ));

    TestHarness {
        services,
        user_repo,
        video_repo,
        token_issuer,
    }
}
