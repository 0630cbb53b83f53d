pub mod links;
mod ownership;
pub mod pages;
pub mod profile;
