//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ExplorerError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Invalid request (validation error)
    BadRequest(String),
    /// Internal server error
    Internal(String),
    /// Engine error
    Explorer(ExplorerError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Explorer(e) => {
                let (status, code) = match &e {
                    ExplorerError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
                    ExplorerError::Validation { .. } => {
                        (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
                    }
                    ExplorerError::Load { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "LOAD_ERROR"),
                    ExplorerError::Configuration { .. } => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "CONFIGURATION_ERROR")
                    }
                    ExplorerError::Internal { .. } => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
                    }
                };
                let mut body = ApiError::new(code, e.to_string());
                if let Some(op) = e.context().operation.as_deref() {
                    body = body.with_details(format!("operation={}", op));
                }
                (status, body)
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<ExplorerError> for AppError {
    fn from(err: ExplorerError) -> Self {
        AppError::Explorer(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explorer_errors_map_to_status() {
        let not_found = AppError::from(ExplorerError::not_found("no such role")).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let invalid = AppError::from(ExplorerError::validation("bad brush")).into_response();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let internal = AppError::Internal("boom".to_string()).into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_api_error_omits_empty_details() {
        let json = serde_json::to_value(ApiError::new("NOT_FOUND", "missing")).unwrap();
        assert!(json.get("details").is_none());
        let json =
            serde_json::to_value(ApiError::new("NOT_FOUND", "missing").with_details("x")).unwrap();
        assert_eq!(json["details"], "x");
    }
}
