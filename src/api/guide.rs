use crate::model::GuideList;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::info;

/// Lists the whole guide catalog. The request is never read.
pub(crate) async fn list() -> impl IntoResponse {
    info!("GET guides");

    (StatusCode::OK, Json(GuideList::default()))
}
