//! Multipart form route: reports the parts it received.

use axum::{
    extract::{multipart::MultipartRejection, Multipart},
    routing::post,
    Json, Router,
};

use crate::entity::{PartInfo, UploadSummary};
use crate::http::response::AppError;
use crate::http::server::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/upload", post(upload))
}

async fn upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadSummary>, AppError> {
    let mut multipart = multipart?;
    let mut parts = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        // Part bodies are drained, only their size is kept.
        let size = field.bytes().await?.len();
        parts.push(PartInfo {
            name,
            file_name,
            size,
        });
    }

    tracing::debug!(parts = parts.len(), "Multipart form received");
    Ok(Json(UploadSummary::from(parts)))
}
