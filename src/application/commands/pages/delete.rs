// src/application/commands/pages/delete.rs
use super::PageCommandService;
use crate::{
    application::{commands::ownership::load_managed_page, error::ApplicationResult},
    domain::user::UserId,
};

pub struct DeletePageCommand {
    pub id: i64,
}

impl PageCommandService {
    pub async fn delete_page(&self, owner: UserId, command: DeletePageCommand) -> ApplicationResult<()> {
        let page = load_managed_page(self.read_repo.as_ref(), command.id, owner).await?;
        self.write_repo.delete(page.id, owner).await?;
        tracing::info!(page_id = %page.id, slug = %page.slug, "page deleted with its links");
        Ok(())
    }
}
