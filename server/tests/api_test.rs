//! HTTP-level tests driving every route through the router.

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use server::api::server::build_router;
use server::api::AppState;
use server::config::SlugSettings;
use server::store::SqliteStore;
use server::test_helpers;

const VALID_URL: &str = "https://script.google.com/macros/s/ABC123/exec";

async fn setup_router() -> Result<Router> {
    let pool = test_helpers::create_test_pool().await?;
    let store = Arc::new(SqliteStore::new(pool));
    Ok(build_router(AppState::new(store, SlugSettings::default())))
}

fn create_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/create")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::HOST, "slugs.example.com")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Result<serde_json::Value> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

async fn text_body(response: axum::response::Response) -> Result<String> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(String::from_utf8(bytes.to_vec())?)
}

#[tokio::test]
async fn home_serves_the_form_page() -> Result<()> {
    let app = setup_router().await?;

    let response = app.oneshot(get_request("/")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = text_body(response).await?;
    assert!(body.contains("Slug Generator"));
    assert!(body.contains("/api/create"));

    Ok(())
}

#[tokio::test]
async fn create_returns_created_with_shareable_url() -> Result<()> {
    let app = setup_router().await?;

    let body = serde_json::json!({ "name": "My Awesome App", "url": VALID_URL }).to_string();
    let response = app.oneshot(create_request(&body)).await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = json_body(response).await?;
    assert_eq!(json["success"], true);
    assert_eq!(json["slug"], "my-awesome-app");
    assert_eq!(json["url"], "http://slugs.example.com/my-awesome-app");

    Ok(())
}

#[tokio::test]
async fn create_with_missing_fields_is_bad_request() -> Result<()> {
    let app = setup_router().await?;

    let body = serde_json::json!({ "name": "", "url": VALID_URL }).to_string();
    let response = app.oneshot(create_request(&body)).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await?;
    assert_eq!(json["error"], "Name and URL are required");

    Ok(())
}

#[tokio::test]
async fn create_with_invalid_target_url_is_bad_request() -> Result<()> {
    let app = setup_router().await?;

    let body = serde_json::json!({ "name": "App", "url": "https://example.com" }).to_string();
    let response = app.oneshot(create_request(&body)).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await?;
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("deployment URL")
    );

    Ok(())
}

#[tokio::test]
async fn create_with_malformed_body_is_bad_request() -> Result<()> {
    let app = setup_router().await?;

    let response = app.oneshot(create_request("{not json")).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await?;
    assert_eq!(json["error"], "Invalid request body");

    Ok(())
}

#[tokio::test]
async fn get_api_returns_the_stored_record() -> Result<()> {
    let app = setup_router().await?;

    let body = serde_json::json!({ "name": "My Awesome App", "url": VALID_URL }).to_string();
    let response = app.clone().oneshot(create_request(&body)).await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(get_request("/api/get/my-awesome-app")).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await?;
    assert_eq!(json["name"], "My Awesome App");
    assert_eq!(json["url"], VALID_URL);
    assert!(json["createdAt"].is_string());

    Ok(())
}

#[tokio::test]
async fn get_api_for_unknown_slug_is_json_not_found() -> Result<()> {
    let app = setup_router().await?;

    let response = app.oneshot(get_request("/api/get/nonexistent")).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = json_body(response).await?;
    assert_eq!(json["error"], "Slug not found");

    Ok(())
}

#[tokio::test]
async fn viewer_embeds_the_target_url() -> Result<()> {
    let app = setup_router().await?;

    let body = serde_json::json!({ "name": "My Awesome App", "url": VALID_URL }).to_string();
    let response = app.clone().oneshot(create_request(&body)).await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(get_request("/my-awesome-app")).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let html = text_body(response).await?;
    assert!(html.contains("<iframe"));
    assert!(html.contains(VALID_URL));
    assert!(html.contains("<title>My Awesome App</title>"));

    Ok(())
}

#[tokio::test]
async fn viewer_for_unknown_slug_is_html_not_found() -> Result<()> {
    let app = setup_router().await?;

    let response = app.oneshot(get_request("/nonexistent")).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let html = text_body(response).await?;
    assert!(html.contains("Slug Not Found"));

    Ok(())
}

#[tokio::test]
async fn options_on_api_routes_is_no_content() -> Result<()> {
    let app = setup_router().await?;

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/create")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    Ok(())
}

#[tokio::test]
async fn cross_origin_requests_are_allowed() -> Result<()> {
    let app = setup_router().await?;

    let request = Request::builder()
        .uri("/api/get/nonexistent")
        .header(header::ORIGIN, "https://elsewhere.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await?;

    let allow_origin = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .and_then(|value| value.to_str().ok());
    assert_eq!(allow_origin, Some("*"));

    Ok(())
}
