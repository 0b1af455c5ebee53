use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    get_daily_progress::{__path_get_daily_progress, get_daily_progress},
    get_daily_summary::{__path_get_daily_summary, get_daily_summary},
    recompute_daily_summary::{__path_recompute_daily_summary, recompute_daily_summary},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_daily_summary, get_daily_progress, recompute_daily_summary))]
pub struct DailySummaryApiDoc;

pub fn daily_summary_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/daily-summary", root_path),
            get(get_daily_summary),
        )
        .route(
            &format!("{}/daily-summary/progress", root_path),
            get(get_daily_progress),
        )
        .route(
            &format!("{}/daily-summary/recompute", root_path),
            post(recompute_daily_summary),
        )
}
