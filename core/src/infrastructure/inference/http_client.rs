use reqwest::Client;
use tracing::instrument;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{ports::FoodInferenceClient, value_objects::InferenceRequest},
};

/// Client for a food-analysis endpoint that accepts `{imageData, userId}` and
/// answers with the analysis JSON (optionally wrapped in a `data` envelope).
#[derive(Debug, Clone)]
pub struct HttpInferenceClient {
    endpoint: String,
    bearer_token: Option<String>,
    client: Client,
}

impl HttpInferenceClient {
    pub fn new(endpoint: String, bearer_token: Option<String>) -> Self {
        Self {
            endpoint,
            bearer_token,
            client: Client::new(),
        }
    }
}

impl FoodInferenceClient for HttpInferenceClient {
    #[instrument(skip(self, request), fields(endpoint = %self.endpoint, user_id = %request.user_id))]
    async fn analyze_image(&self, request: InferenceRequest) -> Result<String, CoreError> {
        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(token) = &self.bearer_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!("Inference request failed: {}", e);
            CoreError::InferenceError(format!("Inference request failed: {}", e))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read inference response: {}", e);
            CoreError::InferenceError(format!("Failed to read inference response: {}", e))
        })?;

        if !status.is_success() {
            tracing::error!("Inference endpoint error: {} - {}", status, body);
            return Err(CoreError::InferenceError(format!(
                "Inference endpoint returned {}: {}",
                status, body
            )));
        }

        Ok(body)
    }
}
