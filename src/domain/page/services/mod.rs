// src/domain/page/services/mod.rs
use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::repository::PageReadRepository;
use crate::domain::page::slug::SlugGenerator;
use crate::domain::page::value_objects::{PageSlug, PageTitle};

/// Domain service that turns a title into a page address and checks whether
/// that address is still free.
///
/// The availability check is only a fast path. Storage enforces slug
/// uniqueness and the write repository reports a late collision with the same
/// `SlugConflict` error.
pub struct PageSlugService {
    read_repo: Arc<dyn PageReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl PageSlugService {
    pub fn new(read_repo: Arc<dyn PageReadRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub fn slug_for(&self, title: &PageTitle) -> DomainResult<PageSlug> {
        PageSlug::from_generated(title, self.generator.slugify(title.as_str()))
    }

    pub async fn is_slug_taken(&self, slug: &PageSlug) -> DomainResult<bool> {
        let existing = self.read_repo.find_by_slug(slug).await?;
        Ok(existing.is_some_and(|page| page.slug == *slug))
    }

    /// Derive the slug for `title` and fail with `SlugConflict` if a page
    /// already holds it. No suffix is ever appended.
    pub async fn assign(&self, title: &PageTitle) -> DomainResult<PageSlug> {
        let slug = self.slug_for(title)?;
        if self.is_slug_taken(&slug).await? {
            tracing::debug!(slug = %slug, "slug already taken");
            return Err(DomainError::SlugConflict(slug.into_inner()));
        }
        Ok(slug)
    }
}
