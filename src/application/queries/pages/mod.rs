mod get_by_slug;
mod list_own;
mod service;

pub use get_by_slug::GetPageBySlugQuery;
pub use service::PageQueryService;
