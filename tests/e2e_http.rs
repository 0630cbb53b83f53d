use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

use support::{
    InMemoryStore, OTHER_TOKEN, OWNER_TOKEN, assert_error_response, json_request,
    make_test_router, make_test_router_with, read_json,
};

async fn create_page(app: &axum::Router, title: &str) -> serde_json::Value {
    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/pages",
            Some(OWNER_TOKEN),
            Some(json!({ "title": title })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    read_json(resp).await
}

#[tokio::test]
async fn health_reports_ok() {
    let app = make_test_router();

    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = make_test_router();

    let req = Request::builder()
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc = read_json(resp).await;
    assert!(doc["paths"]["/api/v1/pages"].is_object());
}

#[tokio::test]
async fn create_page_returns_201_with_slug() {
    let app = make_test_router();

    let body = create_page(&app, "Hello World!").await;

    assert_eq!(body["slug"], "hello-world");
    assert_eq!(body["title"], "Hello World!");
    assert_eq!(body["description"], "");
}

#[tokio::test]
async fn duplicate_title_returns_409_with_conflicting_slug() {
    let app = make_test_router();
    create_page(&app, "Hello World").await;

    let resp = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/pages",
            Some(OTHER_TOKEN),
            Some(json!({ "title": "hello world" })),
        ))
        .await
        .unwrap();

    let body = assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;
    assert_eq!(body["slug"], "hello-world");
}

#[tokio::test]
async fn degenerate_title_returns_422() {
    let app = make_test_router();

    let resp = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/pages",
            Some(OWNER_TOKEN),
            Some(json!({ "title": "!!!" })),
        ))
        .await
        .unwrap();

    let body =
        assert_error_response(resp, StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable Entity")
            .await;
    assert!(body.get("slug").is_none());
}

#[tokio::test]
async fn lookup_failure_returns_500_with_generic_message() {
    let store = InMemoryStore::new();
    store.fail_slug_lookups();
    let app = make_test_router_with(&store);

    let resp = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/pages",
            Some(OWNER_TOKEN),
            Some(json!({ "title": "Anything" })),
        ))
        .await
        .unwrap();

    let body = assert_error_response(
        resp,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
    )
    .await;
    assert!(!body["message"].as_str().unwrap().contains("connection"));
}

#[tokio::test]
async fn create_without_token_returns_401() {
    let app = make_test_router();

    let resp = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/pages",
            None,
            Some(json!({ "title": "Anonymous" })),
        ))
        .await
        .unwrap();

    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn create_with_unknown_token_returns_401() {
    let app = make_test_router();

    let resp = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/pages",
            Some("forged"),
            Some(json!({ "title": "Forged" })),
        ))
        .await
        .unwrap();

    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn unknown_slug_returns_404() {
    let app = make_test_router();

    let resp = app
        .oneshot(json_request(
            Method::GET,
            "/api/v1/pages/by-slug/nonexistent",
            None,
            None,
        ))
        .await
        .unwrap();

    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn public_view_flags_owner() {
    let app = make_test_router();
    create_page(&app, "My Links").await;

    for (token, expected) in [(Some(OWNER_TOKEN), true), (Some(OTHER_TOKEN), false), (None, false)] {
        let resp = app
            .clone()
            .oneshot(json_request(
                Method::GET,
                "/api/v1/pages/by-slug/my-links",
                token,
                None,
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = read_json(resp).await;
        assert_eq!(body["page"]["slug"], "my-links");
        assert_eq!(body["is_owner"], expected, "token {token:?}");
    }
}

#[tokio::test]
async fn public_view_ignores_unusable_token() {
    let app = make_test_router();
    create_page(&app, "Open").await;

    let resp = app
        .oneshot(json_request(
            Method::GET,
            "/api/v1/pages/by-slug/open",
            Some("expired-or-garbage"),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["is_owner"], false);
}

#[tokio::test]
async fn another_users_edit_returns_403() {
    let app = make_test_router();
    let page = create_page(&app, "Private Edits").await;
    let id = page["id"].as_i64().unwrap();

    let resp = app
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v1/pages/{id}"),
            Some(OTHER_TOKEN),
            Some(json!({ "title": "Hijacked" })),
        ))
        .await
        .unwrap();

    assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;
}

#[tokio::test]
async fn owner_edit_keeps_address() {
    let app = make_test_router();
    let page = create_page(&app, "First Name").await;
    let id = page["id"].as_i64().unwrap();

    let resp = app
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v1/pages/{id}"),
            Some(OWNER_TOKEN),
            Some(json!({ "title": "Second Name" })),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["title"], "Second Name");
    assert_eq!(body["slug"], "first-name");
}

#[tokio::test]
async fn link_lifecycle_over_http() {
    let store = InMemoryStore::new();
    let app = make_test_router_with(&store);
    let page = create_page(&app, "Linked").await;
    let id = page["id"].as_i64().unwrap();

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            &format!("/api/v1/pages/{id}/links"),
            Some(OWNER_TOKEN),
            Some(json!({ "title": "Blog", "url": "https://blog.example.com" })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let link_id = read_json(resp).await["id"].as_i64().unwrap();

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v1/pages/{id}/links/{link_id}"),
            Some(OWNER_TOKEN),
            Some(json!({ "title": "Journal", "url": "https://blog.example.com" })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["title"], "Journal");

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            &format!("/api/v1/pages/{id}/links"),
            Some(OWNER_TOKEN),
            Some(json!({ "title": "", "url": "https://x.example.com" })),
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::DELETE,
            &format!("/api/v1/pages/{id}/links/{link_id}"),
            Some(OWNER_TOKEN),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(store.link_count(), 0);

    let resp = app
        .oneshot(json_request(
            Method::DELETE,
            &format!("/api/v1/pages/{id}/links/{link_id}"),
            Some(OWNER_TOKEN),
            None,
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn delete_page_then_view_is_404() {
    let store = InMemoryStore::new();
    let app = make_test_router_with(&store);
    let page = create_page(&app, "Gone Soon").await;
    let id = page["id"].as_i64().unwrap();

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::DELETE,
            &format!("/api/v1/pages/{id}"),
            Some(OWNER_TOKEN),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, json!({ "status": "deleted" }));

    let resp = app
        .oneshot(json_request(
            Method::GET,
            "/api/v1/pages/by-slug/gone-soon",
            None,
            None,
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn my_pages_and_avatar_endpoints() {
    let app = make_test_router();
    create_page(&app, "Alpha").await;
    create_page(&app, "Beta").await;

    let resp = app
        .clone()
        .oneshot(json_request(Method::GET, "/api/v1/me/pages", Some(OWNER_TOKEN), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let pages = read_json(resp).await;
    assert_eq!(pages.as_array().map(Vec::len), Some(2));
    assert_eq!(pages[0]["slug"], "beta");

    let resp = app
        .clone()
        .oneshot(json_request(Method::GET, "/api/v1/me/avatar", Some(OWNER_TOKEN), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(read_json(resp).await.is_null());

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/api/v1/me/avatar",
            Some(OWNER_TOKEN),
            Some(json!({ "image_url": "https://cdn.example.com/me.png" })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(json_request(
            Method::GET,
            "/api/v1/pages/by-slug/alpha",
            None,
            None,
        ))
        .await
        .unwrap();
    let body = read_json(resp).await;
    assert_eq!(body["avatar_url"], "https://cdn.example.com/me.png");
}

#[tokio::test]
async fn blank_title_on_edit_returns_422() {
    let app = make_test_router();
    let page = create_page(&app, "Named").await;
    let id = page["id"].as_i64().unwrap();

    let resp = app
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v1/pages/{id}"),
            Some(OWNER_TOKEN),
            Some(json!({ "title": "   " })),
        ))
        .await
        .unwrap();

    assert_error_response(resp, StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable Entity").await;
}
