// src/application/commands/pages/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::page::{PageReadRepository, PageWriteRepository, services::PageSlugService},
};

pub struct PageCommandService {
    pub(super) write_repo: Arc<dyn PageWriteRepository>,
    pub(super) read_repo: Arc<dyn PageReadRepository>,
    pub(super) slug_service: Arc<PageSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PageCommandService {
    pub fn new(
        write_repo: Arc<dyn PageWriteRepository>,
        read_repo: Arc<dyn PageReadRepository>,
        slug_service: Arc<PageSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
        }
    }
}
