use axum::extract::State;
use nutrilens_core::domain::dashboard::{ports::DashboardService, value_objects::Dashboard};
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
pub struct DashboardResponse {
    pub data: Dashboard,
}

#[utoipa::path(
    get,
    path = "",
    tag = "dashboard",
    summary = "Home dashboard",
    description = "Profile, today's progress against targets, recent entries and active goals in one call.",
    responses(
        (status = 200, body = DashboardResponse)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DashboardResponse>, ApiError> {
    let dashboard = state
        .service
        .get_dashboard(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DashboardResponse { data: dashboard }))
}
