// src/application/commands/pages/update.rs
use super::PageCommandService;
use crate::{
    application::{commands::ownership::load_managed_page, dto::PageDto, error::ApplicationResult},
    domain::{
        page::{PageDescription, PageTitle, PageUpdate},
        user::UserId,
    },
};

pub struct UpdatePageCommand {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl PageCommandService {
    /// Edit title and description. The slug assigned at creation never changes.
    pub async fn update_page(
        &self,
        owner: UserId,
        command: UpdatePageCommand,
    ) -> ApplicationResult<PageDto> {
        let mut page = load_managed_page(self.read_repo.as_ref(), command.id, owner).await?;

        let title_opt = command.title.map(PageTitle::new).transpose()?;
        let description_opt = command.description.map(PageDescription::new);
        if title_opt.is_none() && description_opt.is_none() {
            return Ok(page.into());
        }

        let title = title_opt.unwrap_or_else(|| page.title.clone());
        let description = description_opt.unwrap_or_else(|| page.description.clone());
        page.set_content(title, description);

        let update = PageUpdate::new(page.id, owner)
            .with_title(page.title)
            .with_description(page.description);

        let updated = self.write_repo.update(update).await?;
        tracing::info!(page_id = %updated.id, slug = %updated.slug, "page updated");
        Ok(updated.into())
    }
}
