use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use thiserror::Error;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;
use tracing::debug;

mod guide;

pub(crate) fn get_api() -> NormalizePath<Router> {
    let router = Router::new()
        .route("/guides", get(guide::list))
        .route("/guides.json", get(guide::list))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http());

    NormalizePath::trim_trailing_slash(router)
}

async fn fallback(uri: Uri) -> ApiError {
    debug!(path = uri.path(), "No route");
    ApiError::NotFound(uri.path().to_string())
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("Resource not found")]
    NotFound(String),
}

#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse {
    errors: Vec<ErrorMessage>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ErrorMessage {
    code: String,
    message: String,
    detail: String,
}

impl From<ApiError> for ErrorResponse {
    fn from(error: ApiError) -> Self {
        let message = error.to_string();
        let message = match error {
            ApiError::NotFound(path) => ErrorMessage {
                code: "NOT_FOUND".to_string(),
                message,
                detail: path,
            },
        };

        Self {
            errors: vec![message],
        }
    }
}
