//! Request-Boundary Error Taxonomy

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Failures surfaced at the request boundary.
///
/// `ArtifactUnavailable` and `InsufficientHistory` are normally absorbed by
/// the fallback path and never reach the wire; they exist so the boundary
/// contract names every failure mode. Any variant that does surface becomes
/// `{"success": false, "error": ...}` with HTTP 500 — a partial success
/// body is never returned.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("model artifacts unavailable")]
    ArtifactUnavailable,

    #[error(transparent)]
    InsufficientHistory(#[from] feature_engine::FeatureError),

    #[error("scoring failed: {0}")]
    ScoringFailure(String),
}

impl From<inference_engine::InferenceError> for ApiError {
    fn from(err: inference_engine::InferenceError) -> Self {
        ApiError::ScoringFailure(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request failed");
        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
