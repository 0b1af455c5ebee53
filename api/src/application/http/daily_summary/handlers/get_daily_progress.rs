use axum::extract::{Query, State};
use nutrilens_core::domain::daily_summary::{
    ports::DailySummaryService, value_objects::DailyProgress,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::SummaryDateQuery;
use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DailyProgressResponse {
    pub data: DailyProgress,
}

#[utoipa::path(
    get,
    path = "/progress",
    tag = "daily-summary",
    summary = "Progress against daily targets",
    params(SummaryDateQuery),
    responses(
        (status = 200, body = DailyProgressResponse)
    ),
)]
pub async fn get_daily_progress(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Query(query): Query<SummaryDateQuery>,
) -> Result<Response<DailyProgressResponse>, ApiError> {
    let progress = state
        .service
        .get_daily_progress(identity, query.date_or_today())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DailyProgressResponse { data: progress }))
}
