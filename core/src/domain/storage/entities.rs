use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A meal photo persisted in object storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoredAsset {
    pub bucket: String,
    pub object_key: String,
    pub public_url: String,
    pub original_name: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub checksum_sha256: String,
}
