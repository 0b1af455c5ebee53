use std::future::Future;

use bytes::Bytes;

use crate::domain::common::entities::app_errors::CoreError;

/// Port for object storage operations (MinIO/S3)
#[cfg_attr(test, mockall::automock)]
pub trait ObjectStoragePort: Send + Sync {
    /// Bucket that receives meal photos
    fn bucket_name(&self) -> String;

    /// Upload an object directly to storage
    fn put_object(
        &self,
        bucket: &str,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Stable public URL for an uploaded object
    fn public_url(&self, bucket: &str, object_key: &str) -> String;
}
