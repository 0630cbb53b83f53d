// src/domain/link/entity.rs
use crate::domain::link::value_objects::{ImageUrl, LinkId, LinkTitle, LinkUrl};
use crate::domain::page::PageId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Link {
    pub id: LinkId,
    pub page_id: PageId,
    pub title: LinkTitle,
    pub url: LinkUrl,
    pub image_url: Option<ImageUrl>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewLink {
    pub page_id: PageId,
    pub title: LinkTitle,
    pub url: LinkUrl,
    pub image_url: Option<ImageUrl>,
    pub created_at: DateTime<Utc>,
}

/// Full replacement of a link's editable fields.
#[derive(Debug, Clone)]
pub struct LinkUpdate {
    pub id: LinkId,
    pub page_id: PageId,
    pub title: LinkTitle,
    pub url: LinkUrl,
    pub image_url: Option<ImageUrl>,
}
