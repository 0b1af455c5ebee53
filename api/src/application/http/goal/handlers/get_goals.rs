use axum::extract::State;
use nutrilens_core::domain::goal::{entities::UserGoal, ports::GoalService};
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
pub struct GetGoalsResponse {
    pub data: Vec<UserGoal>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "goal",
    summary = "Active goals",
    responses(
        (status = 200, body = GetGoalsResponse)
    ),
)]
pub async fn get_goals(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetGoalsResponse>, ApiError> {
    let goals = state
        .service
        .list_active_goals(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetGoalsResponse { data: goals }))
}
