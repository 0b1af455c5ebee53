use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

use super::handlers::analyze_food_image::{__path_analyze_food_image, analyze_food_image};
use crate::application::http::server::app_state::AppState;

/// Multipart framing on top of the largest accepted photo.
pub const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(analyze_food_image))]
pub struct FoodAnalysisApiDoc;

pub fn upload_body_limit(state: &AppState) -> DefaultBodyLimit {
    DefaultBodyLimit::max(state.args.pipeline.max_image_bytes + MULTIPART_OVERHEAD)
}

pub fn food_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/food-analysis/image", state.args.server.root_path),
            post(analyze_food_image),
        )
        .layer(upload_body_limit(&state))
}
