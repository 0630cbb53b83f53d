// src/presentation/http/controllers/mod.rs
pub mod links;
pub mod pages;
pub mod profile;
