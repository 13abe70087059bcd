mod support;

use std::path::PathBuf;

use support::harness;
use vidhive::application::ApplicationError;
use vidhive::application::commands::users::RegisterUserCommand;
use vidhive::application::commands::videos::{
    CreateVideoCommand, SetPublishStateCommand, UpdateVideoCommand,
};
use vidhive::application::ports::media::{UploadedAssets, VideoAssets};
use vidhive::domain::user::UserId;
use vidhive::domain::video::VideoId;

async fn register_owner(h: &support::TestHarness, username: &str) -> UserId {
    let user = h
        .services
        .user_commands
        .register(
            RegisterUserCommand {
                username: username.into(),
                email: format!("{username}@x.com"),
                password: "secret".into(),
                full_name: "Owner".into(),
            },
            UploadedAssets {
                avatar: PathBuf::from("/tmp/avatar.png"),
                cover_image: None,
            },
        )
        .await
        .unwrap();
    UserId::new(user.id).unwrap()
}

fn create_command(title: &str, owner: UserId) -> CreateVideoCommand {
    CreateVideoCommand {
        title: title.into(),
        description: "a description".into(),
        duration_secs: 120,
        owner_id: owner,
    }
}

fn video_assets() -> VideoAssets {
    VideoAssets {
        video_file: PathBuf::from("/tmp/clip.mp4"),
        thumbnail: PathBuf::from("/tmp/thumb.jpg"),
    }
}

#[tokio::test]
async fn identical_titles_get_counter_suffixed_slugs() {
    let h = harness();
    let owner = register_owner(&h, "ana").await;

    let first = h
        .services
        .video_commands
        .create(create_command("Hello World!", owner), video_assets())
        .await
        .unwrap();
    let second = h
        .services
        .video_commands
        .create(create_command("Hello World!", owner), video_assets())
        .await
        .unwrap();
    let third = h
        .services
        .video_commands
        .create(create_command("Hello World!", owner), video_assets())
        .await
        .unwrap();

    assert_eq!(first.slug, "hello-world");
    assert_eq!(second.slug, "hello-world-1");
    assert_eq!(third.slug, "hello-world-2");
}

#[tokio::test]
async fn concurrent_creations_with_same_title_get_distinct_slugs() {
    let h = harness();
    let owner = register_owner(&h, "ana").await;

    let a = h
        .services
        .video_commands
        .create(create_command("Race Day", owner), video_assets());
    let b = h
        .services
        .video_commands
        .create(create_command("Race Day", owner), video_assets());

    let (a, b) = tokio::join!(a, b);
    let (a, b) = (a.unwrap(), b.unwrap());

    assert_ne!(a.slug, b.slug);
    assert!(a.slug.starts_with("race-day"));
    assert!(b.slug.starts_with("race-day"));
}

#[tokio::test]
async fn retitling_reallocates_the_slug_once() {
    let h = harness();
    let owner = register_owner(&h, "ana").await;

    let video = h
        .services
        .video_commands
        .create(create_command("First Title", owner), video_assets())
        .await
        .unwrap();
    assert_eq!(video.slug, "first-title");

    let updated = h
        .services
        .video_commands
        .update(UpdateVideoCommand {
            video_id: VideoId::new(video.id).unwrap(),
            title: Some("Second Title".into()),
            description: None,
            actor_id: owner,
        })
        .await
        .unwrap();
    assert_eq!(updated.slug, "second-title");
}

#[tokio::test]
async fn unchanged_title_keeps_the_slug() {
    let h = harness();
    let owner = register_owner(&h, "ana").await;

    let video = h
        .services
        .video_commands
        .create(create_command("Stable Title", owner), video_assets())
        .await
        .unwrap();

    let updated = h
        .services
        .video_commands
        .update(UpdateVideoCommand {
            video_id: VideoId::new(video.id).unwrap(),
            title: Some("Stable Title".into()),
            description: Some("new description".into()),
            actor_id: owner,
        })
        .await
        .unwrap();

    assert_eq!(updated.slug, video.slug);
    assert_eq!(updated.description, "new description");
}

#[tokio::test]
async fn only_the_owner_can_edit_or_publish() {
    let h = harness();
    let owner = register_owner(&h, "ana").await;
    let stranger = register_owner(&h, "bea").await;

    let video = h
        .services
        .video_commands
        .create(create_command("Private Clip", owner), video_assets())
        .await
        .unwrap();

    let err = h
        .services
        .video_commands
        .update(UpdateVideoCommand {
            video_id: VideoId::new(video.id).unwrap(),
            title: Some("Hijacked".into()),
            description: None,
            actor_id: stranger,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let err = h
        .services
        .video_commands
        .set_publish_state(SetPublishStateCommand {
            video_id: VideoId::new(video.id).unwrap(),
            published: true,
            actor_id: stranger,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn drafts_are_invisible_to_non_owners_and_views_count() {
    let h = harness();
    let owner = register_owner(&h, "ana").await;

    let video = h
        .services
        .video_commands
        .create(create_command("Watch Me", owner), video_assets())
        .await
        .unwrap();

    // Unpublished: anonymous viewers see nothing.
    let err = h
        .services
        .video_queries
        .get_by_slug(&video.slug, None)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    h.services
        .video_commands
        .set_publish_state(SetPublishStateCommand {
            video_id: VideoId::new(video.id).unwrap(),
            published: true,
            actor_id: owner,
        })
        .await
        .unwrap();

    let watched = h
        .services
        .video_queries
        .get_by_slug(&video.slug, None)
        .await
        .unwrap();
    assert!(watched.is_published);

    let watched_again = h
        .services
        .video_queries
        .get_by_slug(&video.slug, None)
        .await
        .unwrap();
    assert_eq!(watched_again.views, watched.views + 1);
}

#[tokio::test]
async fn failed_video_upload_aborts_creation() {
    let h = harness();
    let owner = register_owner(&h, "ana").await;

    let err = h
        .services
        .video_commands
        .create(
            create_command("Doomed", owner),
            VideoAssets {
                video_file: PathBuf::from("/tmp/broken-clip.mp4"),
                thumbnail: PathBuf::from("/tmp/thumb.jpg"),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Infrastructure(_)));

    let listed = h
        .services
        .video_queries
        .list_by_owner(owner)
        .await
        .unwrap();
    assert!(listed.is_empty(), "no partial video row may remain");
}
