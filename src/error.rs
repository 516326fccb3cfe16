//! Application error types with HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::models::ColorError;

/// Message returned to clients for any upstream failure.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to fetch Pokémon data";

/// Message returned to clients for a rejected identifier.
pub const INVALID_ID_MESSAGE: &str = "Invalid Pokémon identifier";

/// Application-level errors for Palettedex.
#[derive(Error, Debug)]
pub enum AppError {
    // Upstream errors
    #[error("Upstream request failed: {0}")]
    Upstream(#[source] reqwest::Error),

    #[error("Upstream request timed out after {0:?}")]
    UpstreamTimeout(std::time::Duration),

    #[error("Upstream returned {status} for '{id}'")]
    UpstreamStatus { status: u16, id: String },

    #[error("Upstream payload could not be decoded: {0}")]
    UpstreamDecode(String),

    // Domain errors
    #[error("Type not found: {0}")]
    TypeNotFound(String),

    #[error("Invalid Pokémon identifier: '{0}'")]
    InvalidId(String),

    #[error("Invalid color: {0}")]
    Color(#[from] ColorError),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AppError {
    /// True for failures of the upstream data service, as opposed to bad input.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            AppError::Upstream(_)
                | AppError::UpstreamTimeout(_)
                | AppError::UpstreamStatus { .. }
                | AppError::UpstreamDecode(_)
        )
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::TypeNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidId(_) | AppError::Color(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_)
            | AppError::UpstreamTimeout(_)
            | AppError::UpstreamStatus { .. }
            | AppError::UpstreamDecode(_)
            | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Internal details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::TypeNotFound(_) => "Type not found".to_string(),
            AppError::InvalidId(_) => INVALID_ID_MESSAGE.to_string(),
            AppError::Color(_) => self.to_string(),
            AppError::Config(_) => "Internal server error".to_string(),
            _ => UPSTREAM_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_not_found_maps_to_404() {
        let err = AppError::TypeNotFound("shadow".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_message(), "Type not found");
        assert!(!err.is_upstream());
    }

    #[test]
    fn test_upstream_errors_share_fixed_message() {
        let err = AppError::UpstreamStatus {
            status: 404,
            id: "missingno".to_string(),
        };
        assert!(err.is_upstream());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), UPSTREAM_FAILURE_MESSAGE);

        let err = AppError::UpstreamTimeout(std::time::Duration::from_secs(5));
        assert_eq!(err.public_message(), UPSTREAM_FAILURE_MESSAGE);
    }

    #[test]
    fn test_invalid_id_maps_to_400() {
        let err = AppError::InvalidId("../etc".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), INVALID_ID_MESSAGE);
    }
}
