use axum::extract::{Query, State};
use nutrilens_core::domain::food_entry::{entities::FoodEntry, ports::FoodEntryService};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct RecentEntriesQuery {
    /// Defaults to the configured recent-entries limit
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecentEntriesResponse {
    pub data: Vec<FoodEntry>,
}

#[utoipa::path(
    get,
    path = "/recent",
    tag = "food-entry",
    summary = "Recent food entries",
    params(RecentEntriesQuery),
    responses(
        (status = 200, body = RecentEntriesResponse)
    ),
)]
pub async fn get_recent_entries(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Query(query): Query<RecentEntriesQuery>,
) -> Result<Response<RecentEntriesResponse>, ApiError> {
    let entries = state
        .service
        .get_recent_entries(identity, query.limit)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecentEntriesResponse { data: entries }))
}
