pub mod auth;
pub mod links;
pub mod pages;
pub mod profile;

pub use auth::AuthenticatedUser;
pub use links::LinkDto;
pub use pages::{PageDto, PublicPageDto};
pub use profile::AvatarDto;
