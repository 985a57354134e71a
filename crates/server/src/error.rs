//! Unified error handling for the HTTP boundary.
//!
//! Route handlers return `Result<T, ApiError>`. Domain errors map to their
//! contractual status codes and user-facing messages; store and internal
//! failures are logged server-side and collapsed to a generic message so
//! nothing internal leaks to clients.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use vitrine_core::DomainError;

use crate::store::StoreError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A catalog query or order operation failed.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A backing JSON document could not be read or written.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Anything unexpected, including malformed request bodies.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Domain(err) => match err {
                DomainError::InvalidParams(_) | DomainError::MissingDependency { .. } => {
                    StatusCode::FORBIDDEN
                }
                DomainError::NotFound(_) => StatusCode::NOT_FOUND,
                DomainError::EmptyOrder | DomainError::UnknownProduct(_) => {
                    StatusCode::BAD_REQUEST
                }
            },
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Domain(err) => match err {
                DomainError::InvalidParams(_) | DomainError::MissingDependency { .. } => {
                    "Fail Params"
                }
                DomainError::NotFound(_) => "Not Found",
                DomainError::EmptyOrder => "Empty Order",
                DomainError::UnknownProduct(_) => "Unknown Product",
            },
            Self::Store(_) | Self::Internal(_) => "Server Error",
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn domain_errors_map_to_contract_status_codes() {
        assert_eq!(
            status_of(DomainError::InvalidParams("foo".to_owned()).into()),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(
                DomainError::MissingDependency {
                    param: "category",
                    requires: "gender",
                }
                .into()
            ),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(DomainError::NotFound("7".to_owned()).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_of(DomainError::EmptyOrder.into()), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(DomainError::UnknownProduct("7".to_owned()).into()),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn internal_errors_collapse_to_generic_message() {
        let response = ApiError::Internal("secret detail".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
