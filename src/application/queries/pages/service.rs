use std::sync::Arc;

use crate::domain::{avatar::AvatarRepository, link::LinkRepository, page::PageReadRepository};

pub struct PageQueryService {
    pub(super) page_repo: Arc<dyn PageReadRepository>,
    pub(super) link_repo: Arc<dyn LinkRepository>,
    pub(super) avatar_repo: Arc<dyn AvatarRepository>,
}

impl PageQueryService {
    pub fn new(
        page_repo: Arc<dyn PageReadRepository>,
        link_repo: Arc<dyn LinkRepository>,
        avatar_repo: Arc<dyn AvatarRepository>,
    ) -> Self {
        Self {
            page_repo,
            link_repo,
            avatar_repo,
        }
    }
}
