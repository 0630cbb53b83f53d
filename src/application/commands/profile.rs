// src/application/commands/profile.rs
use std::sync::Arc;

use crate::{
    application::{dto::AvatarDto, error::ApplicationResult, ports::time::Clock},
    domain::{
        avatar::{Avatar, AvatarRepository},
        link::ImageUrl,
        user::UserId,
    },
};

pub struct SetAvatarCommand {
    pub image_url: String,
}

pub struct ProfileCommandService {
    avatar_repo: Arc<dyn AvatarRepository>,
    clock: Arc<dyn Clock>,
}

impl ProfileCommandService {
    pub fn new(avatar_repo: Arc<dyn AvatarRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { avatar_repo, clock }
    }

    pub async fn set_avatar(
        &self,
        owner: UserId,
        command: SetAvatarCommand,
    ) -> ApplicationResult<AvatarDto> {
        let avatar = Avatar {
            user_id: owner,
            image_url: ImageUrl::new(command.image_url)?,
            updated_at: self.clock.now(),
        };

        let stored = self.avatar_repo.upsert(avatar).await?;
        tracing::info!(user_id = %owner, "avatar updated");
        Ok(stored.into())
    }
}
