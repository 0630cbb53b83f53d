// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use linkpage_core::application::{
    ports::{security::TokenVerifier, time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use linkpage_core::domain::{
    avatar::AvatarRepository,
    link::LinkRepository,
    page::{PageReadRepository, PageWriteRepository},
};
use linkpage_core::infrastructure::util::DefaultSlugGenerator;
use linkpage_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;

use super::mocks::{DummyClock, DummyTokenVerifier, InMemoryStore};

pub fn build_services(store: &Arc<InMemoryStore>) -> Arc<ApplicationServices> {
    let page_write: Arc<dyn PageWriteRepository> = store.clone();
    let page_read: Arc<dyn PageReadRepository> = store.clone();
    let links: Arc<dyn LinkRepository> = store.clone();
    let avatars: Arc<dyn AvatarRepository> = store.clone();
    let verifier: Arc<dyn TokenVerifier> = Arc::new(DummyTokenVerifier);
    let clock: Arc<dyn Clock> = Arc::new(DummyClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    Arc::new(ApplicationServices::new(
        page_write, page_read, links, avatars, verifier, clock, slugger,
    ))
}

pub fn make_test_router_with(store: &Arc<InMemoryStore>) -> axum::Router {
    let state = HttpState {
        services: build_services(store),
    };
    build_router(state, &["http://localhost:5173".to_string()])
}

pub fn make_test_router() -> axum::Router {
    make_test_router_with(&InMemoryStore::new())
}

/// JSON request, optionally carrying a bearer token.
pub fn json_request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

/// Assert an `ErrorResponse` body with the expected status and reason; returns the body.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let json = read_json(resp).await;
    assert_eq!(json["error"], expected_error, "unexpected body: {json}");
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected a non-empty message in {json}"
    );
    json
}
