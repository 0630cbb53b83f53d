// src/infrastructure/repositories/postgres_avatar.rs
use super::map_sqlx;
use crate::domain::avatar::{Avatar, AvatarRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::link::ImageUrl;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresAvatarRepository {
    pool: PgPool,
}

impl PostgresAvatarRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AvatarRow {
    user_id: Uuid,
    image_url: String,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AvatarRow> for Avatar {
    type Error = DomainError;

    fn try_from(row: AvatarRow) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: UserId::new(row.user_id)?,
            image_url: ImageUrl::new(row.image_url)?,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl AvatarRepository for PostgresAvatarRepository {
    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<Avatar>> {
        let row = sqlx::query_as::<_, AvatarRow>(
            "SELECT user_id, image_url, updated_at FROM images WHERE user_id = $1",
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Avatar::try_from).transpose()
    }

    async fn upsert(&self, avatar: Avatar) -> DomainResult<Avatar> {
        let row = sqlx::query_as::<_, AvatarRow>(
            "INSERT INTO images (user_id, image_url, updated_at)
             VALUES ($1, $2, $3)
             ON CONFLICT (user_id)
             DO UPDATE SET image_url = EXCLUDED.image_url, updated_at = EXCLUDED.updated_at
             RETURNING user_id, image_url, updated_at",
        )
        .bind(avatar.user_id.as_uuid())
        .bind(avatar.image_url.as_str())
        .bind(avatar.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Avatar::try_from(row)
    }
}
