// src/infrastructure/repositories/postgres_page.rs
use super::{map_page_insert, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::{
    NewPage, Page, PageDescription, PageId, PageReadRepository, PageSlug, PageTitle, PageUpdate,
    PageWriteRepository,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const PAGE_COLUMNS: &str = "id, slug, title, description, user_id, created_at";

#[derive(Clone)]
pub struct PostgresPageWriteRepository {
    pool: PgPool,
}

impl PostgresPageWriteRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPageReadRepository {
    pool: PgPool,
}

impl PostgresPageReadRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PageRow {
    id: i64,
    slug: String,
    title: String,
    description: String,
    user_id: Uuid,
    created_at: DateTime<Utc>,
}

impl TryFrom<PageRow> for Page {
    type Error = DomainError;

    fn try_from(row: PageRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PageId::new(row.id)?,
            slug: PageSlug::new(row.slug)?,
            title: PageTitle::new(row.title)?,
            description: PageDescription::new(row.description),
            owner_id: UserId::new(row.user_id)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl PageWriteRepository for PostgresPageWriteRepository {
    async fn insert(&self, page: NewPage) -> DomainResult<Page> {
        let NewPage {
            slug,
            title,
            description,
            owner_id,
            created_at,
        } = page;

        let row = sqlx::query_as::<_, PageRow>(&format!(
            "INSERT INTO pages (slug, title, description, user_id, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {PAGE_COLUMNS}"
        ))
        .bind(slug.as_str())
        .bind(title.as_str())
        .bind(description.as_str())
        .bind(owner_id.as_uuid())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_page_insert(err, slug.as_str()))?;

        Page::try_from(row)
    }

    async fn update(&self, update: PageUpdate) -> DomainResult<Page> {
        let PageUpdate {
            id,
            owner_id,
            title,
            description,
        } = update;

        let row = sqlx::query_as::<_, PageRow>(&format!(
            "UPDATE pages
             SET title = COALESCE($1, title), description = COALESCE($2, description)
             WHERE id = $3 AND user_id = $4
             RETURNING {PAGE_COLUMNS}"
        ))
        .bind(title.map(PageTitle::into_inner))
        .bind(description.map(PageDescription::into_inner))
        .bind(i64::from(id))
        .bind(owner_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("page not found".into()))?;

        Page::try_from(row)
    }

    async fn delete(&self, id: PageId, owner_id: UserId) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("DELETE FROM links WHERE page_id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let result = sqlx::query("DELETE FROM pages WHERE id = $1 AND user_id = $2")
            .bind(i64::from(id))
            .bind(owner_id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("page not found".into()));
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }
}

#[async_trait]
impl PageReadRepository for PostgresPageReadRepository {
    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>> {
        let row = sqlx::query_as::<_, PageRow>(&format!(
            "SELECT {PAGE_COLUMNS} FROM pages WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &PageSlug) -> DomainResult<Option<Page>> {
        let row = sqlx::query_as::<_, PageRow>(&format!(
            "SELECT {PAGE_COLUMNS} FROM pages WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }

    async fn list_by_owner(&self, owner_id: UserId) -> DomainResult<Vec<Page>> {
        let rows = sqlx::query_as::<_, PageRow>(&format!(
            "SELECT {PAGE_COLUMNS} FROM pages WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        ))
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Page::try_from).collect()
    }
}
