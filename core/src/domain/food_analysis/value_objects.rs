use serde::Serialize;
use uuid::Uuid;

use crate::domain::storage::value_objects::ImageFile;

#[derive(Debug, Clone)]
pub struct AnalyzeFoodInput {
    pub image: ImageFile,
    /// Reject responses that recognise no food at all.
    pub require_foods: bool,
}

impl AnalyzeFoodInput {
    pub fn new(image: ImageFile) -> Self {
        Self {
            image,
            require_foods: true,
        }
    }
}

/// Body of one inference call. The image travels base64-encoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceRequest {
    pub image_data: String,
    pub user_id: Uuid,
    #[serde(skip)]
    pub mime_type: String,
}
