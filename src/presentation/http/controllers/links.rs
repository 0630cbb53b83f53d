// src/presentation/http/controllers/links.rs
use crate::application::{
    commands::links::{AddLinkCommand, RemoveLinkCommand, UpdateLinkCommand},
    dto::LinkDto,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LinkRequest {
    pub title: String,
    pub url: String,
    /// Public URL of an already uploaded image.
    #[serde(default)]
    pub image_url: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/pages/{id}/links",
    params(("id" = i64, Path, description = "Page identifier")),
    request_body = LinkRequest,
    responses(
        (status = 201, description = "Link appended to the page.", body = LinkDto),
        (status = 400, description = "Title and URL are required.", body = ErrorResponse),
        (status = 403, description = "Not the page owner.", body = ErrorResponse),
        (status = 404, description = "Page not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Links"
)]
pub async fn add_link(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(page_id): Path<i64>,
    Json(payload): Json<LinkRequest>,
) -> HttpResult<(StatusCode, Json<LinkDto>)> {
    let command = AddLinkCommand {
        page_id,
        title: payload.title,
        url: payload.url,
        image_url: payload.image_url,
    };

    state
        .services
        .link_commands
        .add_link(user.id, command)
        .await
        .into_http()
        .map(|link| (StatusCode::CREATED, Json(link)))
}

#[utoipa::path(
    put,
    path = "/api/v1/pages/{id}/links/{link_id}",
    params(
        ("id" = i64, Path, description = "Page identifier"),
        ("link_id" = i64, Path, description = "Link identifier")
    ),
    request_body = LinkRequest,
    responses(
        (status = 200, description = "Link updated.", body = LinkDto),
        (status = 400, description = "Title and URL are required.", body = ErrorResponse),
        (status = 403, description = "Not the page owner.", body = ErrorResponse),
        (status = 404, description = "Page or link not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Links"
)]
pub async fn update_link(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((page_id, link_id)): Path<(i64, i64)>,
    Json(payload): Json<LinkRequest>,
) -> HttpResult<Json<LinkDto>> {
    let command = UpdateLinkCommand {
        page_id,
        link_id,
        title: payload.title,
        url: payload.url,
        image_url: payload.image_url,
    };

    state
        .services
        .link_commands
        .update_link(user.id, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/pages/{id}/links/{link_id}",
    params(
        ("id" = i64, Path, description = "Page identifier"),
        ("link_id" = i64, Path, description = "Link identifier")
    ),
    responses(
        (status = 200, description = "Link removed.", body = StatusResponse),
        (status = 403, description = "Not the page owner.", body = ErrorResponse),
        (status = 404, description = "Page or link not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Links"
)]
pub async fn remove_link(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((page_id, link_id)): Path<(i64, i64)>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .link_commands
        .remove_link(user.id, RemoveLinkCommand { page_id, link_id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}
