use axum::extract::{Multipart, State};
use nutrilens_core::domain::{
    food_analysis::entities::AnalysisResult,
    food_entry::{entities::FoodEntry, ports::FoodEntryService, value_objects::SaveFoodEntryInput},
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

const ANALYSIS_FIELD: &str = "analysis";

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SaveFoodEntryResponse {
    pub data: FoodEntry,
}

#[utoipa::path(
    post,
    path = "",
    tag = "food-entry",
    summary = "Save an analysed meal",
    description = "Multipart form with the `analysis` JSON returned by the analyze endpoint and, optionally, the original `image`. The photo is uploaded first, then one entry is written and the day's summary recomputed.",
    responses(
        (status = 201, body = SaveFoodEntryResponse),
        (status = 400, description = "Analysis missing or invalid"),
        (status = 502, description = "Photo upload failed"),
    ),
)]
pub async fn save_food_entry(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    mut multipart: Multipart,
) -> Result<Response<SaveFoodEntryResponse>, ApiError> {
    let mut image = None;
    let mut analysis: Option<AnalysisResult> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        match field.name() {
            Some(IMAGE_FIELD) => image = Some(read_image_field(field).await?),
            Some(ANALYSIS_FIELD) => {
                let raw = field.text().await.map_err(multipart_error)?;
                analysis = Some(
                    serde_json::from_str(&raw)
                        .map_err(|e| ApiError::BadRequest(format!("Invalid analysis: {}", e)))?,
                );
            }
            _ => {}
        }
    }

    let analysis =
        analysis.ok_or_else(|| ApiError::BadRequest("Missing analysis field".to_string()))?;

    let entry = state
        .service
        .save_food_entry(identity, SaveFoodEntryInput { image, analysis })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SaveFoodEntryResponse { data: entry }))
}
