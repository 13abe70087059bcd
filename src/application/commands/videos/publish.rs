// src/application/commands/videos/publish.rs
use super::VideoCommandService;
use crate::{
    application::{
        dto::VideoDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{user::UserId, video::VideoId},
};

pub struct SetPublishStateCommand {
    pub video_id: VideoId,
    pub published: bool,
    pub actor_id: UserId,
}

impl VideoCommandService {
    pub async fn set_publish_state(
        &self,
        command: SetPublishStateCommand,
    ) -> ApplicationResult<VideoDto> {
        let video = self
            .video_repo
            .find_by_id(command.video_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("video not found"))?;

        if video.owner_id != command.actor_id {
            return Err(ApplicationError::forbidden(
                "only the owner can publish this video",
            ));
        }

        let updated = self
            .video_repo
            .set_publish_state(video.id, command.published)
            .await?;

        Ok(updated.into())
    }
}
