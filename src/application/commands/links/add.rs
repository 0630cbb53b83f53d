// src/application/commands/links/add.rs
use super::LinkCommandService;
use crate::{
    application::{commands::ownership::load_managed_page, dto::LinkDto, error::ApplicationResult},
    domain::{
        link::{ImageUrl, LinkTitle, LinkUrl, NewLink},
        user::UserId,
    },
};

pub struct AddLinkCommand {
    pub page_id: i64,
    pub title: String,
    pub url: String,
    pub image_url: Option<String>,
}

impl LinkCommandService {
    pub async fn add_link(&self, owner: UserId, command: AddLinkCommand) -> ApplicationResult<LinkDto> {
        let page = load_managed_page(self.page_repo.as_ref(), command.page_id, owner).await?;

        let new_link = NewLink {
            page_id: page.id,
            title: LinkTitle::new(command.title)?,
            url: LinkUrl::new(command.url)?,
            image_url: ImageUrl::optional(command.image_url)?,
            created_at: self.clock.now(),
        };

        let created = self.link_repo.insert(new_link).await?;
        tracing::info!(page_id = %page.id, link_id = %created.id, "link added");
        Ok(created.into())
    }
}
