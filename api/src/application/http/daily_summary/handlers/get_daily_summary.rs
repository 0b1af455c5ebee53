use axum::extract::{Query, State};
use nutrilens_core::domain::daily_summary::{entities::DailySummary, ports::DailySummaryService};
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
pub struct DailySummaryResponse {
    pub data: DailySummary,
}

#[utoipa::path(
    get,
    path = "",
    tag = "daily-summary",
    summary = "Daily nutrition summary",
    description = "Derives the day's totals from the ledger against the current targets and stores the result.",
    params(SummaryDateQuery),
    responses(
        (status = 200, body = DailySummaryResponse)
    ),
)]
pub async fn get_daily_summary(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Query(query): Query<SummaryDateQuery>,
) -> Result<Response<DailySummaryResponse>, ApiError> {
    let summary = state
        .service
        .get_daily_summary(identity, query.date_or_today())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DailySummaryResponse { data: summary }))
}
