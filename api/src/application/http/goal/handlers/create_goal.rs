use axum::extract::State;
use nutrilens_core::domain::goal::{entities::UserGoal, ports::GoalService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        goal::validators::CreateGoalValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GoalResponse {
    pub data: UserGoal,
}

#[utoipa::path(
    post,
    path = "",
    tag = "goal",
    summary = "Create goal",
    description = "Starts a goal today. Progress is derived from the current and target values.",
    request_body = CreateGoalValidator,
    responses(
        (status = 201, body = GoalResponse),
        (status = 400, description = "Missing target, unit or date"),
    ),
)]
pub async fn create_goal(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateGoalValidator>,
) -> Result<Response<GoalResponse>, ApiError> {
    let goal = state
        .service
        .create_goal(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(GoalResponse { data: goal }))
}
