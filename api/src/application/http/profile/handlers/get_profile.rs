use axum::extract::State;
use nutrilens_core::domain::profile::{entities::UserProfile, ports::ProfileService};
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
pub struct ProfileResponse {
    pub data: UserProfile,
}

#[utoipa::path(
    get,
    path = "",
    tag = "profile",
    summary = "Current user's profile",
    description = "Returns the caller's profile. A profile with default daily targets is created on first access.",
    responses(
        (status = 200, body = ProfileResponse)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ProfileResponse>, ApiError> {
    let profile = state
        .service
        .get_profile(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProfileResponse { data: profile }))
}
