use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use nutrilens_core::domain::authentication::value_objects::Identity;
use uuid::Uuid;

use super::http::server::api_entities::api_error::ApiError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_EMAIL_HEADER: &str = "x-user-email";

/// Signed-in user resolved by the upstream auth proxy.
///
/// The proxy forwards the subject as `X-User-Id` and, when known, the address
/// as `X-User-Email`. Requests without a valid subject are rejected.
pub struct RequiredIdentity(pub Identity);

pub fn identity_from_headers(headers: &HeaderMap) -> Result<Identity, ApiError> {
    let raw = headers
        .get(USER_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            ApiError::Unauthorized("Authentication required: missing X-User-Id header".to_string())
        })?;

    let user_id = Uuid::parse_str(raw)
        .map_err(|_| ApiError::Unauthorized("X-User-Id must be a UUID".to_string()))?;

    let email = headers
        .get(USER_EMAIL_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    Ok(Identity::new(user_id, email))
}

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>().cloned() {
            return Ok(RequiredIdentity(identity));
        }

        let identity = identity_from_headers(&parts.headers)?;
        parts.extensions.insert(identity.clone());

        Ok(RequiredIdentity(identity))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderValue, Request};

    use super::*;

    #[test]
    fn reads_subject_and_optional_email() {
        let user_id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_ID_HEADER,
            HeaderValue::from_str(&user_id.to_string()).unwrap(),
        );
        headers.insert(USER_EMAIL_HEADER, HeaderValue::from_static("lee@example.com"));

        let identity = identity_from_headers(&headers).unwrap();
        assert_eq!(identity.id(), user_id);
        assert_eq!(identity.email(), Some("lee@example.com"));
    }

    #[test]
    fn missing_or_malformed_subject_is_unauthorized() {
        assert!(matches!(
            identity_from_headers(&HeaderMap::new()),
            Err(ApiError::Unauthorized(_))
        ));

        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("not-a-uuid"));
        assert!(matches!(
            identity_from_headers(&headers),
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn extractor_caches_identity_in_extensions() {
        let user_id = Uuid::new_v4();
        let (mut parts, _) = Request::builder()
            .header(USER_ID_HEADER, user_id.to_string())
            .body(())
            .unwrap()
            .into_parts();

        let RequiredIdentity(identity) = RequiredIdentity::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(identity.id(), user_id);
        assert_eq!(parts.extensions.get::<Identity>(), Some(&identity));
    }
}
