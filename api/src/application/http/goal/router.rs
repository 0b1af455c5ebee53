use axum::{
    Router,
    routing::{get, patch},
};
use utoipa::OpenApi;

use super::handlers::{
    create_goal::{__path_create_goal, create_goal},
    deactivate_goal::{__path_deactivate_goal, deactivate_goal},
    get_goals::{__path_get_goals, get_goals},
    update_goal_value::{__path_update_goal_value, update_goal_value},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_goals, create_goal, update_goal_value, deactivate_goal))]
pub struct GoalApiDoc;

pub fn goal_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/goals", root_path),
            get(get_goals).post(create_goal),
        )
        .route(
            &format!("{}/goals/{{goal_id}}", root_path),
            patch(update_goal_value).delete(deactivate_goal),
        )
}
