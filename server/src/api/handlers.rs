use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse};
use serde::{Deserialize, Serialize};

use super::AppState;
use super::pages;
use crate::error::SlugError;
use crate::slug::{CreateSlugInput, create_slug, fetch_slug};

#[derive(Deserialize)]
pub struct CreateRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Serialize)]
pub struct CreateResponse {
    pub success: bool,
    pub slug: String,
    pub url: String,
}

/// `POST /api/create` - derive a unique slug and persist the mapping.
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, SlugError> {
    let Json(body) = payload.map_err(|_| SlugError::MalformedRequest)?;

    let input = CreateSlugInput {
        name: body.name,
        url: body.url,
    };
    let created = create_slug(state.store.as_ref(), input, &state.slugs).await?;

    tracing::info!(slug = %created.key, "slug created");

    let response = CreateResponse {
        success: true,
        slug: created.key.clone(),
        url: format!("{}/{}", request_origin(&headers), created.key),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// `GET /api/get/{slug}` - return the stored record as JSON.
pub async fn get_slug_json(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, SlugError> {
    let record = fetch_slug(state.store.as_ref(), &slug).await?;
    Ok(Json(record))
}

/// `GET /{slug}` - render the full-viewport embed page, or a styled 404.
pub async fn view_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    match fetch_slug(state.store.as_ref(), &slug).await {
        Ok(record) => (StatusCode::OK, Html(pages::viewer_page(&record))),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Html(pages::not_found_page().to_string()),
        ),
    }
}

/// `GET /` - the slug creation form.
pub async fn home() -> Html<&'static str> {
    Html(pages::home_page())
}

pub async fn api_options() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Compose the request origin for the shareable URL in create responses.
/// Honors `X-Forwarded-Proto` when the server sits behind a proxy.
fn request_origin(headers: &HeaderMap) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost");
    format!("{scheme}://{host}")
}
