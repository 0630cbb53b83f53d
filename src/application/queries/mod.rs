pub mod pages;
pub mod profile;
