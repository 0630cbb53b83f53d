use crate::domain::avatar::Avatar;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AvatarDto {
    pub user_id: Uuid,
    pub image_url: String,
    pub updated_at: DateTime<Utc>,
}

impl From<Avatar> for AvatarDto {
    fn from(avatar: Avatar) -> Self {
        Self {
            user_id: avatar.user_id.into(),
            image_url: avatar.image_url.into_inner(),
            updated_at: avatar.updated_at,
        }
    }
}
