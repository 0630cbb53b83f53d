// src/domain/page/specifications.rs
use crate::domain::page::entity::Page;
use crate::domain::user::UserId;

pub trait PageSpecification {
    fn is_satisfied(&self) -> bool;
}

/// Editing a page, its links, or deleting it is reserved to the owner.
pub struct CanManagePageSpec<'a> {
    page: &'a Page,
    user_id: UserId,
}

impl<'a> CanManagePageSpec<'a> {
    pub const fn new(page: &'a Page, user_id: UserId) -> Self {
        Self { page, user_id }
    }
}

impl PageSpecification for CanManagePageSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.page.is_owned_by(self.user_id)
    }
}
