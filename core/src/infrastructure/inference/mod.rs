pub mod gemini_client;
pub mod http_client;

use crate::domain::{
    common::{InferenceConfig, InferenceProvider, entities::app_errors::CoreError},
    food_analysis::{ports::FoodInferenceClient, value_objects::InferenceRequest},
};

pub use gemini_client::GeminiInferenceClient;
pub use http_client::HttpInferenceClient;

/// Inference adapter selected from configuration at startup.
#[derive(Debug, Clone)]
pub enum InferenceBackend {
    Gemini(GeminiInferenceClient),
    Http(HttpInferenceClient),
}

impl InferenceBackend {
    pub fn from_config(config: &InferenceConfig) -> Result<Self, CoreError> {
        match config.provider {
            InferenceProvider::Gemini => Ok(Self::Gemini(GeminiInferenceClient::new(
                config.gemini_api_key.clone(),
                config.gemini_model.clone(),
            ))),
            InferenceProvider::Http => {
                let endpoint = config.endpoint.clone().ok_or_else(|| {
                    CoreError::Invalid("an inference endpoint is required for the http provider".to_string())
                })?;
                Ok(Self::Http(HttpInferenceClient::new(
                    endpoint,
                    config.endpoint_token.clone(),
                )))
            }
        }
    }
}

impl FoodInferenceClient for InferenceBackend {
    async fn analyze_image(&self, request: InferenceRequest) -> Result<String, CoreError> {
        match self {
            Self::Gemini(client) => client.analyze_image(request).await,
            Self::Http(client) => client.analyze_image(request).await,
        }
    }
}
