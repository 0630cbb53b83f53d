// src/domain/page/entity.rs
use crate::domain::page::value_objects::{PageDescription, PageId, PageSlug, PageTitle};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Page {
    pub id: PageId,
    pub slug: PageSlug,
    pub title: PageTitle,
    pub description: PageDescription,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Page {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }

    /// Replace the editable content. The slug stays as assigned at creation.
    pub fn set_content(&mut self, title: PageTitle, description: PageDescription) {
        self.title = title;
        self.description = description;
    }
}

#[derive(Debug, Clone)]
pub struct NewPage {
    pub slug: PageSlug,
    pub title: PageTitle,
    pub description: PageDescription,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PageUpdate {
    pub id: PageId,
    pub owner_id: UserId,
    pub title: Option<PageTitle>,
    pub description: Option<PageDescription>,
}

impl PageUpdate {
    pub const fn new(id: PageId, owner_id: UserId) -> Self {
        Self {
            id,
            owner_id,
            title: None,
            description: None,
        }
    }

    pub fn with_title(mut self, title: PageTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_description(mut self, description: PageDescription) -> Self {
        self.description = Some(description);
        self
    }
}
