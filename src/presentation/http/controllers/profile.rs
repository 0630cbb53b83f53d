// src/presentation/http/controllers/profile.rs
use crate::application::{commands::profile::SetAvatarCommand, dto::AvatarDto};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetAvatarRequest {
    pub image_url: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/me/avatar",
    responses(
        (status = 200, description = "The caller's avatar, or null when none is set.", body = Option<AvatarDto>),
        (status = 401, description = "Unauthorized.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Profile"
)]
pub async fn get_avatar(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Option<AvatarDto>>> {
    state
        .services
        .profile_queries
        .get_avatar(user.id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/me/avatar",
    request_body = SetAvatarRequest,
    responses(
        (status = 200, description = "Avatar stored.", body = AvatarDto),
        (status = 400, description = "Image URL is required.", body = ErrorResponse),
        (status = 401, description = "Unauthorized.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Profile"
)]
pub async fn set_avatar(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<SetAvatarRequest>,
) -> HttpResult<Json<AvatarDto>> {
    state
        .services
        .profile_commands
        .set_avatar(
            user.id,
            SetAvatarCommand {
                image_url: payload.image_url,
            },
        )
        .await
        .into_http()
        .map(Json)
}
