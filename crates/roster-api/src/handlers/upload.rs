//! Image upload handler

use axum::{
    extract::{Multipart, State},
    Json,
};
use roster_service::dto::{UploadFile, UploadResponse};
use roster_service::{ServiceError, UploadService};

use crate::extractors::AdminAuth;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Multipart field carrying the image
const FILE_FIELD: &str = "file";

/// POST /api/upload
pub async fn upload_image(
    State(state): State<AppState>,
    _admin: AdminAuth,
    multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let file = read_file_field(multipart)
        .await?
        .ok_or_else(|| ApiError::Service(ServiceError::validation("No file provided")))?;

    let service = UploadService::new(state.service_context());
    let response = service.upload(file).await?;
    Ok(Json(response))
}

async fn read_file_field(mut multipart: Multipart) -> ApiResult<Option<UploadFile>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::invalid_body(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(String::from);
        let content_type = field.content_type().map(String::from);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::invalid_body(e.body_text()))?;

        return Ok(Some(UploadFile {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        }));
    }

    Ok(None)
}
