use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Everything that can go wrong while creating or fetching a slug.
#[derive(Debug)]
pub enum SlugError {
    MissingField,
    InvalidTargetUrl,
    GenerationExhausted,
    NotFound,
    MalformedRequest,
    Store(anyhow::Error),
}

impl SlugError {
    pub fn status(&self) -> StatusCode {
        match self {
            SlugError::MissingField => StatusCode::BAD_REQUEST,
            SlugError::InvalidTargetUrl => StatusCode::BAD_REQUEST,
            SlugError::GenerationExhausted => StatusCode::INTERNAL_SERVER_ERROR,
            SlugError::NotFound => StatusCode::NOT_FOUND,
            SlugError::MalformedRequest => StatusCode::BAD_REQUEST,
            SlugError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            SlugError::MissingField => "Name and URL are required",
            SlugError::InvalidTargetUrl => {
                "URL must be an Apps Script Web App deployment URL (containing \"/macros/s/\")"
            }
            SlugError::GenerationExhausted => {
                "Failed to generate unique slug. Please try a different name."
            }
            SlugError::NotFound => "Slug not found",
            SlugError::MalformedRequest => "Invalid request body",
            SlugError::Store(_) => "Internal storage error",
        }
    }
}

impl std::fmt::Display for SlugError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for SlugError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SlugError::Store(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl IntoResponse for SlugError {
    fn into_response(self) -> Response {
        if let SlugError::Store(ref err) = self {
            tracing::error!(error = %err, "store operation failed");
        }
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}
