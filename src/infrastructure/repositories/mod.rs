// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_avatar;
mod postgres_link;
mod postgres_page;

pub use error::{map_page_insert, map_sqlx};
pub use postgres_avatar::PostgresAvatarRepository;
pub use postgres_link::PostgresLinkRepository;
pub use postgres_page::{PostgresPageReadRepository, PostgresPageWriteRepository};
