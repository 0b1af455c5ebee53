use axum::extract::{Path, State};
use nutrilens_core::domain::goal::ports::GoalService;
use uuid::Uuid;

use super::create_goal::GoalResponse;
use crate::application::{
    auth::RequiredIdentity,
    http::{
        goal::validators::UpdateGoalValueValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    patch,
    path = "/{goal_id}",
    tag = "goal",
    summary = "Record goal progress",
    params(
        ("goal_id" = Uuid, Path, description = "Goal ID"),
    ),
    request_body = UpdateGoalValueValidator,
    responses(
        (status = 200, body = GoalResponse),
        (status = 404, description = "Goal not found"),
    ),
)]
pub async fn update_goal_value(
    Path(goal_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateGoalValueValidator>,
) -> Result<Response<GoalResponse>, ApiError> {
    let goal = state
        .service
        .update_goal_value(identity, goal_id, payload.current_value)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GoalResponse { data: goal }))
}
