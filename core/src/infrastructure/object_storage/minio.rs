use aws_sdk_s3::{
    Client,
    config::{BehaviorVersion, Credentials, Region},
    primitives::ByteStream,
};
use bytes::Bytes;
use tracing::instrument;

use crate::domain::{
    common::{ObjectStorageConfig, entities::app_errors::CoreError},
    storage::ports::ObjectStoragePort,
};

#[derive(Clone)]
pub struct MinioObjectStorage {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl MinioObjectStorage {
    pub fn new(config: ObjectStorageConfig) -> Self {
        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            "nutrilens",
        );

        let endpoint = config.endpoint.trim_end_matches('/').to_string();

        tracing::info!(
            endpoint = %endpoint,
            region = %config.region,
            bucket = %config.bucket,
            use_ssl = config.use_ssl,
            "Initializing MinIO client"
        );

        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .endpoint_url(&endpoint)
            .force_path_style(true)
            .build();

        let public_base_url = config
            .public_base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(endpoint);

        Self {
            client: Client::from_conf(s3_config),
            bucket: config.bucket,
            public_base_url,
        }
    }
}

/// Path-style public URL: `{base}/{bucket}/{key}`.
fn path_style_url(base: &str, bucket: &str, object_key: &str) -> String {
    format!("{}/{}/{}", base, bucket, object_key.trim_start_matches('/'))
}

impl ObjectStoragePort for MinioObjectStorage {
    fn bucket_name(&self) -> String {
        self.bucket.clone()
    }

    #[instrument(skip(self, payload))]
    async fn put_object(
        &self,
        bucket: &str,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> Result<(), CoreError> {
        let payload_size = payload.len();

        self.client
            .put_object()
            .bucket(bucket)
            .key(object_key)
            .content_type(content_type)
            .body(ByteStream::from(payload))
            .send()
            .await
            .map_err(|e| {
                let error_msg = format!("{}", e);
                let error_kind = if error_msg.contains("dispatch failure") {
                    "HTTP client dispatch failure - check endpoint URL and network connectivity"
                } else if error_msg.contains("timeout") {
                    "Request timeout - check MinIO server status"
                } else {
                    "Unknown error"
                };

                tracing::error!(
                    error = %e,
                    error_kind = %error_kind,
                    bucket = %bucket,
                    object_key = %object_key,
                    payload_size = payload_size,
                    "Failed to upload object"
                );
                CoreError::AssetUploadError(format!("{} ({})", e, error_kind))
            })?;

        tracing::info!(
            bucket = %bucket,
            object_key = %object_key,
            "Object uploaded successfully"
        );

        Ok(())
    }

    fn public_url(&self, bucket: &str, object_key: &str) -> String {
        path_style_url(&self.public_base_url, bucket, object_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_urls_are_path_style() {
        assert_eq!(
            path_style_url("https://cdn.example.com", "food-images", "u/abc.jpg"),
            "https://cdn.example.com/food-images/u/abc.jpg"
        );
        assert_eq!(
            path_style_url("http://localhost:9000", "b", "/k.png"),
            "http://localhost:9000/b/k.png"
        );
    }
}
