// src/application/commands/links/remove.rs
use super::LinkCommandService;
use crate::{
    application::{commands::ownership::load_managed_page, error::ApplicationResult},
    domain::{link::LinkId, user::UserId},
};

pub struct RemoveLinkCommand {
    pub page_id: i64,
    pub link_id: i64,
}

impl LinkCommandService {
    pub async fn remove_link(&self, owner: UserId, command: RemoveLinkCommand) -> ApplicationResult<()> {
        let page = load_managed_page(self.page_repo.as_ref(), command.page_id, owner).await?;
        let link_id = LinkId::new(command.link_id)?;

        // Scoped to the page, so a link id from another page is reported as missing.
        self.link_repo.delete(page.id, link_id).await?;
        tracing::info!(page_id = %page.id, %link_id, "link removed");
        Ok(())
    }
}
