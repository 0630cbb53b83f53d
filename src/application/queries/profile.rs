use std::sync::Arc;

use crate::{
    application::{dto::AvatarDto, error::ApplicationResult},
    domain::{avatar::AvatarRepository, user::UserId},
};

pub struct ProfileQueryService {
    avatar_repo: Arc<dyn AvatarRepository>,
}

impl ProfileQueryService {
    pub fn new(avatar_repo: Arc<dyn AvatarRepository>) -> Self {
        Self { avatar_repo }
    }

    pub async fn get_avatar(&self, owner: UserId) -> ApplicationResult<Option<AvatarDto>> {
        let avatar = self.avatar_repo.find_by_user(owner).await?;
        Ok(avatar.map(AvatarDto::from))
    }
}
