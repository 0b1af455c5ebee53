use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    get_recent_entries::{__path_get_recent_entries, get_recent_entries},
    save_food_entry::{__path_save_food_entry, save_food_entry},
    search_history::{__path_search_history, search_history},
};
use crate::application::http::{
    food_analysis::router::upload_body_limit, server::app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(save_food_entry, get_recent_entries, search_history))]
pub struct FoodEntryApiDoc;

pub fn food_entry_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/food-entries", root_path),
            post(save_food_entry).get(search_history),
        )
        .route(
            &format!("{}/food-entries/recent", root_path),
            get(get_recent_entries),
        )
        .layer(upload_body_limit(&state))
}
