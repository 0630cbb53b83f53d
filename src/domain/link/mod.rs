pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Link, LinkUpdate, NewLink};
pub use repository::LinkRepository;
pub use value_objects::{ImageUrl, LinkId, LinkTitle, LinkUrl};
