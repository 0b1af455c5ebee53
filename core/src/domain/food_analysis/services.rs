use tracing::instrument;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    daily_summary::ports::DailySummaryRepository,
    food_analysis::{
        entities::AnalysisResult,
        helpers::{normalize_analysis, parse_analysis_response},
        ports::{FoodAnalysisService, FoodInferenceClient},
        value_objects::{AnalyzeFoodInput, InferenceRequest},
    },
    food_entry::ports::FoodEntryRepository,
    goal::ports::GoalRepository,
    profile::ports::ProfileRepository,
    storage::{policies::ensure_valid_image, ports::ObjectStoragePort},
};

impl<FE, DS, UP, UG, INF, OS> FoodAnalysisService for Service<FE, DS, UP, UG, INF, OS>
where
    FE: FoodEntryRepository,
    DS: DailySummaryRepository,
    UP: ProfileRepository,
    UG: GoalRepository,
    INF: FoodInferenceClient,
    OS: ObjectStoragePort,
{
    #[instrument(
        skip(self, identity, input),
        fields(user_id = %identity.id(), mime_type = %input.image.mime_type, size = input.image.len())
    )]
    async fn analyze_food(
        &self,
        identity: Identity,
        input: AnalyzeFoodInput,
    ) -> Result<AnalysisResult, CoreError> {
        // 1. Boundary checks
        ensure_valid_image(&input.image, &self.config)?;

        // 2. Encode and call the inference service once, bounded by the timeout
        let request = InferenceRequest {
            image_data: input.image.to_base64(),
            user_id: identity.id(),
            mime_type: input.image.mime_type.clone(),
        };

        let timeout = self.config.inference_timeout;
        let raw_response =
            tokio::time::timeout(timeout, self.inference_client.analyze_image(request))
                .await
                .map_err(|_| {
                    tracing::warn!(timeout_secs = timeout.as_secs(), "Inference call timed out");
                    CoreError::InferenceTimeout(timeout.as_secs())
                })?
                .map_err(|e| match e {
                    CoreError::InferenceError(_) | CoreError::InferenceTimeout(_) => e,
                    other => CoreError::InferenceError(other.to_string()),
                })?;

        // 3. Parse and validate response
        let parsed = parse_analysis_response(&raw_response)?;
        let result = normalize_analysis(parsed, self.config.total_tolerance, input.require_foods)?;

        tracing::info!(
            foods = result.foods.len(),
            total_calories = result.total_nutrition.total_calories,
            "Food analysis complete"
        );

        Ok(result)
    }
}
