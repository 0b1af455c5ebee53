use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

pub const ACCEPTED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

#[derive(Clone, Debug)]
pub struct NutriLensConfig {
    pub database: DatabaseConfig,
    pub inference: InferenceConfig,
    pub object_storage: ObjectStorageConfig,
    pub pipeline: PipelineConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InferenceProvider {
    Gemini,
    Http,
}

#[derive(Clone, Debug)]
pub struct InferenceConfig {
    pub provider: InferenceProvider,
    pub gemini_api_key: String,
    pub gemini_model: String,
    /// Endpoint for the generic `{imageData, userId}` inference contract.
    pub endpoint: Option<String>,
    pub endpoint_token: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ObjectStorageConfig {
    pub endpoint: String,
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
    /// Base used to build public asset URLs, defaults to `{endpoint}/{bucket}`.
    pub public_base_url: Option<String>,
    pub use_ssl: bool,
}

/// Limits and defaults shared by every stage of the food-logging pipeline.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    pub max_image_bytes: usize,
    pub accepted_mime_types: Vec<String>,
    pub inference_timeout: Duration,
    pub total_tolerance: f64,
    pub recent_entries_limit: u64,
    pub default_targets: DefaultTargets,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DefaultTargets {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl Default for DefaultTargets {
    fn default() -> Self {
        Self {
            calories: 2000.0,
            protein_g: 150.0,
            carbs_g: 225.0,
            fat_g: 65.0,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: MAX_IMAGE_BYTES,
            accepted_mime_types: ACCEPTED_IMAGE_TYPES.iter().map(|t| t.to_string()).collect(),
            inference_timeout: Duration::from_secs(30),
            total_tolerance: 0.01,
            recent_entries_limit: 20,
            default_targets: DefaultTargets::default(),
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
