// src/application/commands/ownership.rs
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        page::{
            Page, PageId, PageReadRepository,
            specifications::{CanManagePageSpec, PageSpecification},
        },
        user::UserId,
    },
};

/// Load a page the actor is about to modify, failing unless the actor owns it.
pub(super) async fn load_managed_page(
    repo: &dyn PageReadRepository,
    id: i64,
    actor: UserId,
) -> ApplicationResult<Page> {
    let id = PageId::new(id)?;
    let page = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApplicationError::not_found("page not found"))?;

    if !CanManagePageSpec::new(&page, actor).is_satisfied() {
        tracing::warn!(page_id = %id, actor = %actor, "page change denied for non-owner");
        return Err(ApplicationError::forbidden(
            "only the page owner can change this page",
        ));
    }

    Ok(page)
}
