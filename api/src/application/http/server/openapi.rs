use utoipa::OpenApi;

use crate::application::http::{
    daily_summary::router::DailySummaryApiDoc, dashboard::router::DashboardApiDoc,
    food_analysis::router::FoodAnalysisApiDoc, food_entry::router::FoodEntryApiDoc,
    goal::router::GoalApiDoc, profile::router::ProfileApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriLens API",
        description = "Photograph a meal, review the nutrition estimate, and keep a daily ledger against your targets."
    ),
    nest(
        (path = "/food-analysis", api = FoodAnalysisApiDoc),
        (path = "/food-entries", api = FoodEntryApiDoc),
        (path = "/daily-summary", api = DailySummaryApiDoc),
        (path = "/profile", api = ProfileApiDoc),
        (path = "/goals", api = GoalApiDoc),
        (path = "/dashboard", api = DashboardApiDoc),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_group_is_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/food-analysis/image",
            "/food-entries",
            "/food-entries/recent",
            "/daily-summary/progress",
            "/profile",
            "/goals/{goal_id}",
            "/dashboard",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected} in {paths:?}"
            );
        }
    }
}
