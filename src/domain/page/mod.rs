pub mod entity;
pub mod repository;
pub mod services;
pub mod slug;
pub mod specifications;
pub mod value_objects;

pub use entity::{NewPage, Page, PageUpdate};
pub use repository::{PageReadRepository, PageWriteRepository};
pub use value_objects::{PageDescription, PageId, PageSlug, PageTitle};
