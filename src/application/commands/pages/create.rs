// src/application/commands/pages/create.rs
use super::PageCommandService;
use crate::{
    application::{dto::PageDto, error::ApplicationResult},
    domain::{
        errors::DomainError,
        page::{NewPage, PageDescription, PageTitle},
        user::UserId,
    },
};

pub struct CreatePageCommand {
    pub title: String,
    pub description: Option<String>,
}

impl PageCommandService {
    /// Create a page for `owner` at the slug derived from the title.
    ///
    /// Fails with `InvalidTitle` when the title yields an empty slug and with
    /// `SlugConflict` when the slug belongs to another page, whether that is
    /// seen by the pre-check or by the insert itself.
    pub async fn create_page(
        &self,
        owner: UserId,
        command: CreatePageCommand,
    ) -> ApplicationResult<PageDto> {
        let title = PageTitle::new(command.title)?;
        let description = PageDescription::new(command.description.unwrap_or_default());
        let slug = self.slug_service.assign(&title).await?;

        let new_page = NewPage {
            slug,
            title,
            description,
            owner_id: owner,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_page).await.inspect_err(|err| {
            if let DomainError::SlugConflict(slug) = err {
                tracing::warn!(%slug, "slug claimed by a concurrent page creation");
            }
        })?;

        tracing::info!(page_id = %created.id, slug = %created.slug, %owner, "page created");
        Ok(created.into())
    }
}
