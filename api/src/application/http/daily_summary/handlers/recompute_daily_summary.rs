use axum::extract::{Query, State};
use nutrilens_core::domain::daily_summary::ports::DailySummaryService;

use super::{SummaryDateQuery, get_daily_summary::DailySummaryResponse};
use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/recompute",
    tag = "daily-summary",
    summary = "Recompute a daily summary",
    description = "Rebuilds the day's totals from the stored entries and replaces the cached summary.",
    params(SummaryDateQuery),
    responses(
        (status = 200, body = DailySummaryResponse)
    ),
)]
pub async fn recompute_daily_summary(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Query(query): Query<SummaryDateQuery>,
) -> Result<Response<DailySummaryResponse>, ApiError> {
    let summary = state
        .service
        .recompute_daily_summary(identity, query.date_or_today())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DailySummaryResponse { data: summary }))
}
