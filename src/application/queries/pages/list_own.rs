use super::PageQueryService;
use crate::{
    application::{dto::PageDto, error::ApplicationResult},
    domain::user::UserId,
};

impl PageQueryService {
    /// Pages owned by `owner`, newest first.
    pub async fn list_own_pages(&self, owner: UserId) -> ApplicationResult<Vec<PageDto>> {
        let pages = self.page_repo.list_by_owner(owner).await?;
        Ok(pages.into_iter().map(PageDto::from).collect())
    }
}
