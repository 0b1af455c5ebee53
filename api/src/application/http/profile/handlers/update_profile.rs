use axum::extract::State;
use nutrilens_core::domain::profile::ports::ProfileService;

use super::get_profile::ProfileResponse;
use crate::application::{
    auth::RequiredIdentity,
    http::{
        profile::validators::UpdateProfileValidator,
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
    put,
    path = "",
    tag = "profile",
    summary = "Update profile",
    description = "Partial update. Omitted fields keep their stored value.",
    request_body = UpdateProfileValidator,
    responses(
        (status = 200, body = ProfileResponse),
        (status = 400, description = "Invalid field value"),
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateProfileValidator>,
) -> Result<Response<ProfileResponse>, ApiError> {
    let profile = state
        .service
        .update_profile(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProfileResponse { data: profile }))
}
