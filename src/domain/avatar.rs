// src/domain/avatar.rs
use crate::domain::errors::DomainResult;
use crate::domain::link::ImageUrl;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Profile picture shown on every page a user owns.
#[derive(Debug, Clone)]
pub struct Avatar {
    pub user_id: UserId,
    pub image_url: ImageUrl,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait AvatarRepository: Send + Sync {
    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<Avatar>>;
    /// Insert or replace the user's single avatar.
    async fn upsert(&self, avatar: Avatar) -> DomainResult<Avatar>;
}
