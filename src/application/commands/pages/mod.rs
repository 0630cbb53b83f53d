// src/application/commands/pages/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreatePageCommand;
pub use delete::DeletePageCommand;
pub use service::PageCommandService;
pub use update::UpdatePageCommand;
