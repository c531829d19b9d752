//! Typed API error for HTTP handlers.
//!
//! Converts domain errors into HTTP responses with a JSON body and status
//! code. Handlers return `Result<_, ApiError>`.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use perfcons_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
///
/// `Internal` variant logs the real error server-side and returns
/// a static message to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 401 Unauthorized: missing or wrong bearer token.
    Unauthorized(&'static str),
    /// 404 Not Found: no record for this conversation id.
    NotFound(String),
    /// 409 Conflict: record already exists for this conversation id.
    Conflict(String),
    /// 422 Unprocessable Entity: well-formed request that fails validation.
    UnprocessableEntity(String),
    /// Request body could not be extracted; status comes from the rejection.
    Payload(JsonRejection),
    /// Path segment could not be extracted (e.g. invalid UTF-8 after decoding).
    Path(PathRejection),
    /// 500 Internal Server Error: unexpected failure. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Unauthorized(msg) => {
                let body = Json(serde_json::json!({"error": msg}));
                let mut response = (StatusCode::UNAUTHORIZED, body).into_response();
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
                return response;
            },
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            Self::Payload(rejection) => (rejection.status(), rejection.body_text()),
            Self::Path(rejection) => (rejection.status(), rejection.body_text()),
            Self::Internal(err) => {
                let transient =
                    err.downcast_ref::<ServiceError>().is_some_and(ServiceError::is_transient);
                tracing::error!(error = ?err, transient, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Payload(rejection)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Path(rejection)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(ref e) => Self::UnprocessableEntity(e.to_string()),
            ServiceError::NotFound { .. } => Self::NotFound(err.to_string()),
            ServiceError::Conflict { .. } => Self::Conflict(err.to_string()),
            ServiceError::Storage(_) => Self::Internal(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfcons_core::{ResourceKind, ValidationError};
    use perfcons_storage::StorageError;

    #[test]
    fn test_service_errors_map_to_status_codes() {
        let cases = [
            (
                ServiceError::NotFound { kind: ResourceKind::Fact, conversation_id: "c".into() },
                StatusCode::NOT_FOUND,
            ),
            (
                ServiceError::Conflict { kind: ResourceKind::Budget, conversation_id: "c".into() },
                StatusCode::CONFLICT,
            ),
            (
                ServiceError::InvalidInput(ValidationError::EmptyConversationId),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ServiceError::Storage(StorageError::Join("cancelled".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), expected);
        }
    }

    #[test]
    fn test_unauthorized_sets_challenge_header() {
        let response = ApiError::Unauthorized("Invalid authentication token").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[header::WWW_AUTHENTICATE], "Bearer");
    }
}
