// src/domain/page/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::page::entity::{NewPage, Page, PageUpdate};
use crate::domain::page::value_objects::{PageId, PageSlug};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait PageWriteRepository: Send + Sync {
    /// Insert a page. A slug that is already stored must surface as
    /// `DomainError::SlugConflict`, whatever checks ran before.
    async fn insert(&self, page: NewPage) -> DomainResult<Page>;
    async fn update(&self, update: PageUpdate) -> DomainResult<Page>;
    /// Remove the page and every link on it.
    async fn delete(&self, id: PageId, owner_id: UserId) -> DomainResult<()>;
}

#[async_trait]
pub trait PageReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>>;
    /// Exact slug match. `Ok(None)` means no such row; any other failure is an error.
    async fn find_by_slug(&self, slug: &PageSlug) -> DomainResult<Option<Page>>;
    async fn list_by_owner(&self, owner_id: UserId) -> DomainResult<Vec<Page>>;
}
