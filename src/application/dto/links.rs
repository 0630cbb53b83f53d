use crate::domain::link::Link;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LinkDto {
    pub id: i64,
    pub page_id: i64,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkDto {
    fn from(link: Link) -> Self {
        Self {
            id: link.id.into(),
            page_id: link.page_id.into(),
            title: link.title.into_inner(),
            url: link.url.into_inner(),
            image_url: link.image_url.map(|url| url.into_inner()),
            created_at: link.created_at,
        }
    }
}
