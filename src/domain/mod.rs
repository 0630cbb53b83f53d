// src/domain/mod.rs
pub mod avatar;
pub mod errors;
pub mod link;
pub mod page;
pub mod user;
