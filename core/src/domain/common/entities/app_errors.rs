use thiserror::Error;

/// Coarse classification used by callers to decide where the pipeline goes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Inference,
    AssetUpload,
    Persistence,
    NotFound,
    State,
    Internal,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CoreError {
    #[error("Unsupported image type: {0}")]
    InvalidFileType(String),

    #[error("Image is too large: {size} bytes (max {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Food analysis failed: {0}")]
    InferenceError(String),

    #[error("Food analysis timed out after {0}s")]
    InferenceTimeout(u64),

    #[error("No food detected in the image")]
    NoFoodDetected,

    #[error("Image upload failed: {0}")]
    AssetUploadError(String),

    #[error("Persistence failed: {0}")]
    PersistenceError(String),

    #[error("Not found")]
    NotFound,

    #[error("Invalid pipeline state: {0}")]
    InvalidState(String),

    #[error("No signed-in user")]
    Unauthenticated,

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CoreError::InvalidFileType(_) | CoreError::FileTooLarge { .. } | CoreError::Invalid(_) => {
                ErrorCategory::Validation
            }
            CoreError::InferenceError(_)
            | CoreError::InferenceTimeout(_)
            | CoreError::NoFoodDetected => ErrorCategory::Inference,
            CoreError::AssetUploadError(_) => ErrorCategory::AssetUpload,
            CoreError::PersistenceError(_) => ErrorCategory::Persistence,
            CoreError::NotFound => ErrorCategory::NotFound,
            CoreError::InvalidState(_) | CoreError::Unauthenticated => ErrorCategory::State,
            CoreError::InternalServerError => ErrorCategory::Internal,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_follow_pipeline_taxonomy() {
        assert_eq!(
            CoreError::FileTooLarge { size: 11, max: 10 }.category(),
            ErrorCategory::Validation
        );
        assert_eq!(CoreError::InferenceTimeout(30).category(), ErrorCategory::Inference);
        assert_eq!(CoreError::NoFoodDetected.category(), ErrorCategory::Inference);
        assert_eq!(
            CoreError::AssetUploadError("bucket".into()).category(),
            ErrorCategory::AssetUpload
        );
        assert_eq!(
            CoreError::PersistenceError("insert".into()).category(),
            ErrorCategory::Persistence
        );
    }
}
