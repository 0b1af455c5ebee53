use std::future::Future;

use tracing::instrument;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    daily_summary::ports::DailySummaryRepository,
    food_analysis::ports::FoodInferenceClient,
    food_entry::ports::FoodEntryRepository,
    goal::ports::GoalRepository,
    profile::ports::ProfileRepository,
    storage::{
        entities::StoredAsset,
        policies::{ensure_valid_image, food_image_object_key},
        ports::ObjectStoragePort,
        value_objects::ImageFile,
    },
};

/// Service trait for meal photo uploads
#[cfg_attr(test, mockall::automock)]
pub trait AssetService: Send + Sync {
    /// Upload a meal photo and return its stable public reference
    fn upload_food_image(
        &self,
        identity: Identity,
        image: ImageFile,
    ) -> impl Future<Output = Result<StoredAsset, CoreError>> + Send;
}

impl<FE, DS, UP, UG, INF, OS> AssetService for Service<FE, DS, UP, UG, INF, OS>
where
    FE: FoodEntryRepository,
    DS: DailySummaryRepository,
    UP: ProfileRepository,
    UG: GoalRepository,
    INF: FoodInferenceClient,
    OS: ObjectStoragePort,
{
    #[instrument(skip(self, identity, image), fields(user_id = %identity.id(), filename = %image.file_name))]
    async fn upload_food_image(
        &self,
        identity: Identity,
        image: ImageFile,
    ) -> Result<StoredAsset, CoreError> {
        ensure_valid_image(&image, &self.config)?;

        let bucket = self.object_storage.bucket_name();
        let object_key = food_image_object_key(identity.id(), &image);
        let checksum_sha256 = image.checksum_sha256();
        let size_bytes = image.len() as i64;

        tracing::info!(
            bucket = %bucket,
            object_key = %object_key,
            size = size_bytes,
            "Uploading meal photo"
        );

        self.object_storage
            .put_object(&bucket, &object_key, image.data.clone(), &image.mime_type)
            .await
            .map_err(|e| match e {
                CoreError::AssetUploadError(_) => e,
                other => CoreError::AssetUploadError(other.to_string()),
            })?;

        let public_url = self.object_storage.public_url(&bucket, &object_key);

        Ok(StoredAsset {
            bucket,
            object_key,
            public_url,
            original_name: image.file_name,
            mime_type: image.mime_type,
            size_bytes,
            checksum_sha256,
        })
    }
}
