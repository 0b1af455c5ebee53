use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    food_analysis::{
        entities::AnalysisResult,
        value_objects::{AnalyzeFoodInput, InferenceRequest},
    },
};

/// Remote food-recognition capability. Returns the raw JSON body of the
/// response; validation happens in the service.
#[cfg_attr(test, mockall::automock)]
pub trait FoodInferenceClient: Send + Sync {
    fn analyze_image(
        &self,
        request: InferenceRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for food analysis business logic
#[cfg_attr(test, mockall::automock)]
pub trait FoodAnalysisService: Send + Sync {
    fn analyze_food(
        &self,
        identity: Identity,
        input: AnalyzeFoodInput,
    ) -> impl Future<Output = Result<AnalysisResult, CoreError>> + Send;
}
