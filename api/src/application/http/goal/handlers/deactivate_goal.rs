use axum::extract::{Path, State};
use nutrilens_core::domain::goal::ports::GoalService;
use uuid::Uuid;

use super::create_goal::GoalResponse;
use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    delete,
    path = "/{goal_id}",
    tag = "goal",
    summary = "Deactivate goal",
    description = "Goals are never deleted. The goal is marked inactive and drops out of the active list.",
    params(
        ("goal_id" = Uuid, Path, description = "Goal ID"),
    ),
    responses(
        (status = 200, body = GoalResponse),
        (status = 404, description = "Goal not found"),
    ),
)]
pub async fn deactivate_goal(
    Path(goal_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GoalResponse>, ApiError> {
    let goal = state
        .service
        .deactivate_goal(identity, goal_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GoalResponse { data: goal }))
}
