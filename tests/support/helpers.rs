// tests/support/helpers.rs
use super::mocks::StepClock;
use axum::body::{self, Body};
use axum::http::{HeaderMap, Request, StatusCode, header::AUTHORIZATION};
use axum::response::Response;
use blog_core::application::services::ApplicationServices;
use blog_core::config::IdParsing;
use blog_core::domain::article::ArticleGateway;
use blog_core::infrastructure::{database, repositories::SqliteArticleGateway};
use blog_core::presentation::http::{
    routes::build_router,
    state::{BasicCredentials, HttpState},
    views::Views,
};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "secret";
/// `admin:secret`, base64 encoded.
pub const BASIC_AUTH: &str = "Basic YWRtaW46c2VjcmV0";
/// `admin:wrong`, base64 encoded.
pub const WRONG_BASIC_AUTH: &str = "Basic YWRtaW46d3Jvbmc=";

/// Gateway backed by a fresh in-memory SQLite database with migrations applied.
pub async fn sqlite_gateway() -> Arc<dyn ArticleGateway> {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("in-memory pool");
    database::run_migrations(&pool).await.expect("migrations");
    Arc::new(SqliteArticleGateway::new(pool, Arc::new(StepClock::default())))
}

pub fn build_test_state(gateway: Arc<dyn ArticleGateway>, id_parsing: IdParsing) -> HttpState {
    HttpState {
        services: Arc::new(ApplicationServices::new(gateway)),
        views: Arc::new(Views::new().expect("templates compile")),
        credentials: Arc::new(BasicCredentials::new(USERNAME, PASSWORD)),
        id_parsing,
    }
}

pub async fn make_test_router() -> axum::Router {
    make_test_router_with_gateway(sqlite_gateway().await).await
}

pub async fn make_test_router_with_gateway(gateway: Arc<dyn ArticleGateway>) -> axum::Router {
    build_router(build_test_state(gateway, IdParsing::Strict), Path::new("static"))
}

pub async fn make_lenient_router() -> axum::Router {
    let state = build_test_state(sqlite_gateway().await, IdParsing::Lenient);
    build_router(state, Path::new("static"))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn authed_get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(AUTHORIZATION, BASIC_AUTH)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, json: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(AUTHORIZATION, BASIC_AUTH)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

pub fn authed_delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(AUTHORIZATION, BASIC_AUTH)
        .body(Body::empty())
        .unwrap()
}

pub async fn to_json(resp: Response) -> (StatusCode, HeaderMap, Value) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let json: Value = serde_json::from_slice(&bytes).unwrap_or_else(|err| {
        panic!(
            "expected json body ({err}): {}",
            String::from_utf8_lossy(&bytes)
        )
    });
    (status, parts.headers, json)
}

pub async fn to_text(resp: Response) -> (StatusCode, String) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

/// Assert an error response: status, JSON content type and the canonical
/// reason in the `error` field.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) -> Value {
    let (status, headers, json) = to_json(resp).await;
    assert_eq!(status, expected_status, "unexpected status, body: {json}");
    let ct = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    assert_eq!(json["error"], expected_error);
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message field"
    );
    json
}
