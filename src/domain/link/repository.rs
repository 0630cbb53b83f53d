// src/domain/link/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::link::entity::{Link, LinkUpdate, NewLink};
use crate::domain::link::value_objects::LinkId;
use crate::domain::page::PageId;
use async_trait::async_trait;

#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Links of a page in display order: oldest first, ties broken by id.
    async fn list_by_page(&self, page_id: PageId) -> DomainResult<Vec<Link>>;
    async fn find(&self, page_id: PageId, id: LinkId) -> DomainResult<Option<Link>>;
    async fn insert(&self, link: NewLink) -> DomainResult<Link>;
    async fn update(&self, update: LinkUpdate) -> DomainResult<Link>;
    async fn delete(&self, page_id: PageId, id: LinkId) -> DomainResult<()>;
}
