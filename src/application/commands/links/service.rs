// src/application/commands/links/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{link::LinkRepository, page::PageReadRepository},
};

pub struct LinkCommandService {
    pub(super) page_repo: Arc<dyn PageReadRepository>,
    pub(super) link_repo: Arc<dyn LinkRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl LinkCommandService {
    pub fn new(
        page_repo: Arc<dyn PageReadRepository>,
        link_repo: Arc<dyn LinkRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            page_repo,
            link_repo,
            clock,
        }
    }
}
