// src/infrastructure/repositories/postgres_link.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::link::{
    ImageUrl, Link, LinkId, LinkRepository, LinkTitle, LinkUpdate, LinkUrl, NewLink,
};
use crate::domain::page::PageId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const LINK_COLUMNS: &str = "id, page_id, title, url, image_url, created_at";

#[derive(Clone)]
pub struct PostgresLinkRepository {
    pool: PgPool,
}

impl PostgresLinkRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct LinkRow {
    id: i64,
    page_id: i64,
    title: String,
    url: String,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<LinkRow> for Link {
    type Error = DomainError;

    fn try_from(row: LinkRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: LinkId::new(row.id)?,
            page_id: PageId::new(row.page_id)?,
            title: LinkTitle::new(row.title)?,
            url: LinkUrl::new(row.url)?,
            image_url: ImageUrl::optional(row.image_url)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl LinkRepository for PostgresLinkRepository {
    async fn list_by_page(&self, page_id: PageId) -> DomainResult<Vec<Link>> {
        let rows = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE page_id = $1 ORDER BY created_at ASC, id ASC"
        ))
        .bind(i64::from(page_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Link::try_from).collect()
    }

    async fn find(&self, page_id: PageId, id: LinkId) -> DomainResult<Option<Link>> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE id = $1 AND page_id = $2"
        ))
        .bind(i64::from(id))
        .bind(i64::from(page_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Link::try_from).transpose()
    }

    async fn insert(&self, link: NewLink) -> DomainResult<Link> {
        let NewLink {
            page_id,
            title,
            url,
            image_url,
            created_at,
        } = link;

        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "INSERT INTO links (page_id, title, url, image_url, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {LINK_COLUMNS}"
        ))
        .bind(i64::from(page_id))
        .bind(title.into_inner())
        .bind(url.into_inner())
        .bind(image_url.map(ImageUrl::into_inner))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Link::try_from(row)
    }

    async fn update(&self, update: LinkUpdate) -> DomainResult<Link> {
        let LinkUpdate {
            id,
            page_id,
            title,
            url,
            image_url,
        } = update;

        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "UPDATE links SET title = $1, url = $2, image_url = $3
             WHERE id = $4 AND page_id = $5
             RETURNING {LINK_COLUMNS}"
        ))
        .bind(title.into_inner())
        .bind(url.into_inner())
        .bind(image_url.map(ImageUrl::into_inner))
        .bind(i64::from(id))
        .bind(i64::from(page_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("link not found".into()))?;

        Link::try_from(row)
    }

    async fn delete(&self, page_id: PageId, id: LinkId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM links WHERE id = $1 AND page_id = $2")
            .bind(i64::from(id))
            .bind(i64::from(page_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("link not found".into()));
        }
        Ok(())
    }
}
