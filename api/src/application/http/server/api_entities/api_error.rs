use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nutrilens_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use validator::Validate;

#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    UnsupportedMediaType(String),

    #[error("{0}")]
    UnprocessableEntity(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    GatewayTimeout(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub status: i64,
}

impl ApiError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "E_CONFLICT"),
            ApiError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "E_FILE_TOO_LARGE"),
            ApiError::UnsupportedMediaType(_) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, "E_INVALID_FILE_TYPE")
            }
            ApiError::UnprocessableEntity(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "E_NO_FOOD_DETECTED")
            }
            ApiError::BadGateway(_) => (StatusCode::BAD_GATEWAY, "E_UPSTREAM"),
            ApiError::GatewayTimeout(_) => (StatusCode::GATEWAY_TIMEOUT, "E_UPSTREAM_TIMEOUT"),
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        let message = error.to_string();

        match error {
            CoreError::InvalidFileType(_) => ApiError::UnsupportedMediaType(message),
            CoreError::FileTooLarge { .. } => ApiError::PayloadTooLarge(message),
            CoreError::Invalid(_) => ApiError::BadRequest(message),
            CoreError::NoFoodDetected => ApiError::UnprocessableEntity(message),
            CoreError::InferenceError(_) | CoreError::AssetUploadError(_) => {
                ApiError::BadGateway(message)
            }
            CoreError::InferenceTimeout(_) => ApiError::GatewayTimeout(message),
            CoreError::NotFound => ApiError::NotFound(message),
            CoreError::InvalidState(_) => ApiError::Conflict(message),
            CoreError::Unauthenticated => ApiError::Unauthorized(message),
            CoreError::PersistenceError(detail) => {
                error!("persistence failure surfaced to client: {}", detail);
                ApiError::InternalServerError("Failed to save data".to_string())
            }
            CoreError::InternalServerError => ApiError::InternalServerError(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let body = ErrorResponse {
            code: code.to_string(),
            message: self.to_string(),
            status: status.as_u16() as i64,
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that runs the payload's `validator` rules before the handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string().replace('\n', ", ")))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_errors_map_to_distinct_statuses() {
        let cases = [
            (
                CoreError::InvalidFileType("image/gif".into()),
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ),
            (
                CoreError::FileTooLarge { size: 11, max: 10 },
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (CoreError::NoFoodDetected, StatusCode::UNPROCESSABLE_ENTITY),
            (CoreError::InferenceError("dns".into()), StatusCode::BAD_GATEWAY),
            (CoreError::InferenceTimeout(30), StatusCode::GATEWAY_TIMEOUT),
            (CoreError::AssetUploadError("bucket".into()), StatusCode::BAD_GATEWAY),
            (
                CoreError::PersistenceError("insert".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (CoreError::InvalidState("busy".into()), StatusCode::CONFLICT),
            (CoreError::Unauthenticated, StatusCode::UNAUTHORIZED),
        ];

        for (core, expected) in cases {
            let (status, _) = ApiError::from(core).status_and_code();
            assert_eq!(status, expected);
        }
    }

    #[test]
    fn persistence_details_are_not_leaked() {
        let err = ApiError::from(CoreError::PersistenceError(
            "duplicate key value violates unique constraint".into(),
        ));
        assert_eq!(
            err,
            ApiError::InternalServerError("Failed to save data".to_string())
        );
    }

    #[tokio::test]
    async fn error_body_carries_code_and_status() {
        let response = ApiError::from(CoreError::FileTooLarge {
            size: 11 * 1024 * 1024,
            max: 10 * 1024 * 1024,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.code, "E_FILE_TOO_LARGE");
        assert_eq!(body.status, 413);
    }
}
