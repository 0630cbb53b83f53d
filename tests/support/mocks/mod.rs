// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod security;
pub mod store;
pub mod time;

pub use security::{DummyTokenVerifier, OTHER_TOKEN, OWNER_TOKEN, other_id, owner_id};
pub use store::InMemoryStore;
pub use time::{DummyClock, fixed_now};
