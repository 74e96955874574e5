//! Error types for the script combiner
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Combine Error Enum ==
/// Unified error type for the script combining pipeline.
#[derive(Error, Debug)]
pub enum CombineError {
    /// No manifest exists for the requested set name
    #[error("Script set not found: {0}")]
    SetNotFound(String),

    /// A resource listed in a manifest could not be read
    #[error("Failed to load resource '{resource}': {source}")]
    ResourceLoadFailure {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CombineError {
    fn into_response(self) -> Response {
        let status = match &self {
            CombineError::SetNotFound(_) => StatusCode::NOT_FOUND,
            CombineError::ResourceLoadFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CombineError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the script combiner.
pub type Result<T> = std::result::Result<T, CombineError>;

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_not_found_maps_to_404() {
        let response = CombineError::SetNotFound("demo".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_resource_load_failure_maps_to_500() {
        let err = CombineError::ResourceLoadFailure {
            resource: "x.js".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = CombineError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_messages_name_the_subject() {
        let err = CombineError::SetNotFound("demo".to_string());
        assert!(err.to_string().contains("demo"));

        let err = CombineError::ResourceLoadFailure {
            resource: "x.js".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("x.js"));
    }
}
