//! API error handling
//!
//! Failures from the cache, the upstream provider or the summarizer all
//! collapse into one opaque 502 so callers cannot distinguish which backing
//! service failed. Validation failures are the caller's fault and return 400.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream service error: {0}")]
    Upstream(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error description
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Upstream(msg) => {
                // The cause is logged server-side; the body stays opaque
                error!(cause = %msg, "request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "Upstream service error".to_string(),
                )
            },
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::Storage(msg)
            | ApplicationError::UpstreamFetch(msg)
            | ApplicationError::Summarizer(msg)
            | ApplicationError::Configuration(msg)
            | ApplicationError::Internal(msg) => Self::Upstream(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use domain::DomainError;

    use super::*;

    #[test]
    fn domain_error_converts_to_bad_request() {
        let source = ApplicationError::Domain(DomainError::ValidationError(
            "course code must not be empty".to_string(),
        ));
        let result: ApiError = source.into();
        assert!(matches!(result, ApiError::BadRequest(_)));
    }

    #[test]
    fn backend_errors_converge_on_upstream() {
        for source in [
            ApplicationError::Storage("disk full".to_string()),
            ApplicationError::UpstreamFetch("HTTP 503".to_string()),
            ApplicationError::Summarizer("model down".to_string()),
        ] {
            let result: ApiError = source.into();
            assert!(matches!(result, ApiError::Upstream(_)));
        }
    }

    #[test]
    fn upstream_response_is_opaque() {
        let err = ApiError::Upstream("sqlite: disk I/O error".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn bad_request_response_status() {
        let err = ApiError::BadRequest("invalid".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
