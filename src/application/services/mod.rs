// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            links::LinkCommandService, pages::PageCommandService, profile::ProfileCommandService,
        },
        ports::{security::TokenVerifier, time::Clock, util::SlugGenerator},
        queries::{pages::PageQueryService, profile::ProfileQueryService},
    },
    domain::{
        avatar::AvatarRepository,
        link::LinkRepository,
        page::{PageReadRepository, PageWriteRepository, services::PageSlugService},
    },
};

pub struct ApplicationServices {
    pub page_commands: Arc<PageCommandService>,
    pub link_commands: Arc<LinkCommandService>,
    pub profile_commands: Arc<ProfileCommandService>,
    pub page_queries: Arc<PageQueryService>,
    pub profile_queries: Arc<ProfileQueryService>,
    token_verifier: Arc<dyn TokenVerifier>,
}

impl ApplicationServices {
    pub fn new(
        page_write_repo: Arc<dyn PageWriteRepository>,
        page_read_repo: Arc<dyn PageReadRepository>,
        link_repo: Arc<dyn LinkRepository>,
        avatar_repo: Arc<dyn AvatarRepository>,
        token_verifier: Arc<dyn TokenVerifier>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(PageSlugService::new(
            Arc::clone(&page_read_repo),
            Arc::clone(&slugger),
        ));

        let page_commands = Arc::new(PageCommandService::new(
            Arc::clone(&page_write_repo),
            Arc::clone(&page_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let link_commands = Arc::new(LinkCommandService::new(
            Arc::clone(&page_read_repo),
            Arc::clone(&link_repo),
            Arc::clone(&clock),
        ));

        let profile_commands = Arc::new(ProfileCommandService::new(
            Arc::clone(&avatar_repo),
            Arc::clone(&clock),
        ));

        let page_queries = Arc::new(PageQueryService::new(
            Arc::clone(&page_read_repo),
            Arc::clone(&link_repo),
            Arc::clone(&avatar_repo),
        ));
        let profile_queries = Arc::new(ProfileQueryService::new(Arc::clone(&avatar_repo)));

        Self {
            page_commands,
            link_commands,
            profile_commands,
            page_queries,
            profile_queries,
            token_verifier,
        }
    }

    pub fn token_verifier(&self) -> Arc<dyn TokenVerifier> {
        Arc::clone(&self.token_verifier)
    }
}
