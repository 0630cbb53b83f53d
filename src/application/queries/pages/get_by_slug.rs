use super::PageQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, LinkDto, PublicPageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::page::PageSlug,
};

pub struct GetPageBySlugQuery {
    pub slug: String,
}

impl PageQueryService {
    /// Public view of a page: content, owner avatar and links in display order.
    pub async fn get_public_page(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: GetPageBySlugQuery,
    ) -> ApplicationResult<PublicPageDto> {
        // Nothing that fails slug validation can be stored, so skip the lookup.
        let slug =
            PageSlug::new(query.slug).map_err(|_| ApplicationError::not_found("page not found"))?;
        let page = self
            .page_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;

        let links = self.link_repo.list_by_page(page.id).await?;
        let avatar = self.avatar_repo.find_by_user(page.owner_id).await?;
        let is_owner = viewer.is_some_and(|user| page.is_owned_by(user.id));

        Ok(PublicPageDto {
            avatar_url: avatar.map(|avatar| avatar.image_url.into_inner()),
            links: links.into_iter().map(LinkDto::from).collect(),
            is_owner,
            page: page.into(),
        })
    }
}
