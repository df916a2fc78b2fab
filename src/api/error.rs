//! API error types with structured JSON responses.
//!
//! The API layer is the single place that converts internal errors into
//! user-facing messages. Input errors keep their message (they are
//! user-correctable); internal errors are logged and hidden behind a
//! generic body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::checklist::ChecklistError;
use crate::pipeline::PipelineError;
use crate::recon::ReconError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail.clone())
            }
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, "NOT_FOUND", detail.clone()),
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}

impl From<ChecklistError> for ApiError {
    fn from(err: ChecklistError) -> Self {
        match err {
            ChecklistError::NotFound(key) => ApiError::NotFound(format!("Unknown doctype: {key}")),
            // Soft validation errors are handled at the endpoint before this
            // conversion; reaching here means a handler used them wrongly.
            e if e.is_soft() => ApiError::BadRequest(e.to_string()),
            e => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Checklist(e) => e.into(),
            // Each extraction failure names a file the user can fix or drop.
            PipelineError::Extraction(e) => ApiError::BadRequest(e.to_string()),
            PipelineError::Recon(ReconError::UnmappedCategory(label)) => {
                ApiError::BadRequest(format!("Classifier produced an unmapped category: {label}"))
            }
            e @ (PipelineError::Classify(_)
            | PipelineError::ClassifierMismatch { .. }
            | PipelineError::TaskJoin(_)) => ApiError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    use crate::pipeline::ExtractionError;

    #[tokio::test]
    async fn bad_request_returns_400() {
        let response = ApiError::BadRequest("Missing 'doctype' field".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
        assert_eq!(json["error"]["message"], "Missing 'doctype' field");
    }

    #[tokio::test]
    async fn not_found_returns_404() {
        let response = ApiError::NotFound("Unknown doctype: x".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn internal_hides_details_from_client() {
        let response = ApiError::Internal("lock poisoned".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["message"], "An internal error occurred");
    }

    #[tokio::test]
    async fn checklist_not_found_maps_to_404() {
        let api_err: ApiError = ChecklistError::NotFound("custom_key_9".into()).into();
        let response = api_err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unsupported_file_type_maps_to_400() {
        let api_err: ApiError =
            PipelineError::Extraction(ExtractionError::UnsupportedFileType("a.exe".into())).into();
        let response = api_err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn classifier_mismatch_maps_to_500() {
        let api_err: ApiError = PipelineError::ClassifierMismatch {
            expected: 2,
            got: 3,
        }
        .into();
        let response = api_err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
