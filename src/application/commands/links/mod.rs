// src/application/commands/links/mod.rs
mod add;
mod remove;
mod service;
mod update;

pub use add::AddLinkCommand;
pub use remove::RemoveLinkCommand;
pub use service::LinkCommandService;
pub use update::UpdateLinkCommand;
