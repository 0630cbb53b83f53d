// src/presentation/http/controllers/pages.rs
use crate::application::{
    commands::pages::{CreatePageCommand, DeletePageCommand, UpdatePageCommand},
    dto::{PageDto, PublicPageDto},
    queries::pages::GetPageBySlugQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePageRequest {
    /// Page title. The public address is derived from it once and never changes.
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePageRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/pages",
    request_body = CreatePageRequest,
    responses(
        (status = 201, description = "Page created.", body = PageDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 401, description = "Unauthorized.", body = ErrorResponse),
        (status = 409, description = "Another page already uses the derived address.", body = ErrorResponse),
        (status = 422, description = "Title has nothing to build an address from.", body = ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Pages"
)]
pub async fn create_page(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreatePageRequest>,
) -> HttpResult<(StatusCode, Json<PageDto>)> {
    let command = CreatePageCommand {
        title: payload.title,
        description: payload.description,
    };

    state
        .services
        .page_commands
        .create_page(user.id, command)
        .await
        .into_http()
        .map(|page| (StatusCode::CREATED, Json(page)))
}

#[utoipa::path(
    get,
    path = "/api/v1/pages/by-slug/{slug}",
    params(("slug" = String, Path, description = "Public page address")),
    responses(
        (status = 200, description = "Page with owner avatar and links.", body = PublicPageDto),
        (status = 404, description = "No page at this address.", body = ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = ErrorResponse)
    ),
    security(()),
    tag = "Pages"
)]
pub async fn get_page_by_slug(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<PublicPageDto>> {
    state
        .services
        .page_queries
        .get_public_page(viewer.0.as_ref(), GetPageBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/pages/{id}",
    params(("id" = i64, Path, description = "Page identifier")),
    request_body = UpdatePageRequest,
    responses(
        (status = 200, description = "Page updated; the address is unchanged.", body = PageDto),
        (status = 401, description = "Unauthorized.", body = ErrorResponse),
        (status = 403, description = "Not the page owner.", body = ErrorResponse),
        (status = 404, description = "Page not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Pages"
)]
pub async fn update_page(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePageRequest>,
) -> HttpResult<Json<PageDto>> {
    let command = UpdatePageCommand {
        id,
        title: payload.title,
        description: payload.description,
    };

    state
        .services
        .page_commands
        .update_page(user.id, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/pages/{id}",
    params(("id" = i64, Path, description = "Page identifier")),
    responses(
        (status = 200, description = "Page and its links deleted.", body = StatusResponse),
        (status = 401, description = "Unauthorized.", body = ErrorResponse),
        (status = 403, description = "Not the page owner.", body = ErrorResponse),
        (status = 404, description = "Page not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Pages"
)]
pub async fn delete_page(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .page_commands
        .delete_page(user.id, DeletePageCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/me/pages",
    responses(
        (status = 200, description = "Pages owned by the caller, newest first.", body = [PageDto]),
        (status = 401, description = "Unauthorized.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Pages"
)]
pub async fn list_own_pages(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<PageDto>>> {
    state
        .services
        .page_queries
        .list_own_pages(user.id)
        .await
        .into_http()
        .map(Json)
}
