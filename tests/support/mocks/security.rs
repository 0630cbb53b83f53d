// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use linkpage_core::application::{
    ApplicationResult, dto::AuthenticatedUser, error::ApplicationError,
    ports::security::TokenVerifier,
};
use linkpage_core::domain::user::UserId;
use uuid::Uuid;

use super::time::fixed_now;

pub const OWNER_TOKEN: &str = "owner-token";
pub const OTHER_TOKEN: &str = "other-token";

pub fn owner_id() -> UserId {
    UserId::new(Uuid::from_u128(0x0a11_ce00)).unwrap()
}

pub fn other_id() -> UserId {
    UserId::new(Uuid::from_u128(0x0b0b_0000)).unwrap()
}

pub fn user(id: UserId) -> AuthenticatedUser {
    AuthenticatedUser {
        id,
        issued_at: fixed_now(),
        expires_at: fixed_now() + Duration::hours(1),
    }
}

/// Accepts exactly two fixed tokens, one per test user.
pub struct DummyTokenVerifier;

#[async_trait]
impl TokenVerifier for DummyTokenVerifier {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            OWNER_TOKEN => Ok(user(owner_id())),
            OTHER_TOKEN => Ok(user(other_id())),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}
