use axum::extract::{Multipart, State};
use nutrilens_core::domain::food_analysis::{
    entities::AnalysisResult, ports::FoodAnalysisService, value_objects::AnalyzeFoodInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        food_analysis::multipart::{IMAGE_FIELD, multipart_error, read_image_field},
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyzeFoodResponse {
    pub data: AnalysisResult,
}

#[utoipa::path(
    post,
    path = "/image",
    tag = "food-analysis",
    summary = "Analyze a food photo",
    description = "Sends the uploaded photo (multipart field `image`, JPEG/PNG/WebP up to 10MB) to the vision model and returns the normalized nutrition breakdown. Nothing is stored.",
    responses(
        (status = 200, body = AnalyzeFoodResponse),
        (status = 413, description = "Image larger than the configured limit"),
        (status = 415, description = "Unsupported image type"),
        (status = 422, description = "No food recognised in the photo"),
        (status = 502, description = "Inference provider failed"),
        (status = 504, description = "Inference timed out"),
    ),
)]
pub async fn analyze_food_image(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeFoodResponse>, ApiError> {
    let mut image = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() == Some(IMAGE_FIELD) {
            image = Some(read_image_field(field).await?);
        }
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let result = state
        .service
        .analyze_food(identity, AnalyzeFoodInput::new(image))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeFoodResponse { data: result }))
}
