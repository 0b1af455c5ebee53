use axum::{
    extract::multipart::{Field, MultipartError},
    http::StatusCode,
};
use nutrilens_core::domain::storage::value_objects::ImageFile;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const IMAGE_FIELD: &str = "image";

pub fn multipart_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(e.body_text())
    } else {
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e.body_text()))
    }
}

/// Buffer an uploaded photo. Type and size checks are left to the pipeline.
pub async fn read_image_field(field: Field<'_>) -> Result<ImageFile, ApiError> {
    let file_name = field.file_name().unwrap_or("upload").to_string();
    let mime_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    let data = field.bytes().await.map_err(multipart_error)?;

    Ok(ImageFile::new(file_name, mime_type, data))
}
