// src/application/commands/links/update.rs
use super::LinkCommandService;
use crate::{
    application::{
        commands::ownership::load_managed_page,
        dto::LinkDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        link::{ImageUrl, LinkId, LinkTitle, LinkUpdate, LinkUrl},
        user::UserId,
    },
};

pub struct UpdateLinkCommand {
    pub page_id: i64,
    pub link_id: i64,
    pub title: String,
    pub url: String,
    pub image_url: Option<String>,
}

impl LinkCommandService {
    pub async fn update_link(
        &self,
        owner: UserId,
        command: UpdateLinkCommand,
    ) -> ApplicationResult<LinkDto> {
        let page = load_managed_page(self.page_repo.as_ref(), command.page_id, owner).await?;
        let link_id = LinkId::new(command.link_id)?;
        let existing = self
            .link_repo
            .find(page.id, link_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("link not found"))?;

        let update = LinkUpdate {
            id: existing.id,
            page_id: page.id,
            title: LinkTitle::new(command.title)?,
            url: LinkUrl::new(command.url)?,
            image_url: ImageUrl::optional(command.image_url)?,
        };

        let updated = self.link_repo.update(update).await?;
        tracing::info!(page_id = %page.id, link_id = %updated.id, "link updated");
        Ok(updated.into())
    }
}
