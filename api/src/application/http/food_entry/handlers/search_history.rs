use axum::extract::{Query, State};
use nutrilens_core::domain::food_entry::{
    ports::FoodEntryService,
    value_objects::{EntryHistory, EntryHistoryFilter},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SearchHistoryResponse {
    pub data: EntryHistory,
}

#[utoipa::path(
    get,
    path = "",
    tag = "food-entry",
    summary = "Search food history",
    description = "Filters entries by text, UTC day and meal type, and returns the matching entries with their nutrition totals.",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive match on name or description"),
        ("date" = Option<String>, Query, description = "UTC day, YYYY-MM-DD"),
        ("meal_type" = Option<String>, Query, description = "breakfast, lunch, dinner, snack or other"),
        ("limit" = Option<u64>, Query, description = "Maximum entries scanned when no date is given"),
    ),
    responses(
        (status = 200, body = SearchHistoryResponse)
    ),
)]
pub async fn search_history(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Query(filter): Query<EntryHistoryFilter>,
) -> Result<Response<SearchHistoryResponse>, ApiError> {
    let history = state
        .service
        .search_history(identity, filter)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchHistoryResponse { data: history }))
}
