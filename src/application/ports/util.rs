// src/application/ports/util.rs
pub use crate::domain::page::slug::SlugGenerator;
