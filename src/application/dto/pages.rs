use crate::application::dto::LinkDto;
use crate::domain::page::Page;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageDto {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Page> for PageDto {
    fn from(page: Page) -> Self {
        Self {
            id: page.id.into(),
            slug: page.slug.into_inner(),
            title: page.title.into_inner(),
            description: page.description.into_inner(),
            owner_id: page.owner_id.into(),
            created_at: page.created_at,
        }
    }
}

/// Everything a visitor needs to render a page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicPageDto {
    pub page: PageDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub links: Vec<LinkDto>,
    /// True when the viewer owns the page and may edit it.
    pub is_owner: bool,
}
