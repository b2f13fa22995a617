//! Unified error handling for the API server.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::{PlaceOrderError, RepositoryError};

/// Application-level error type for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(RepositoryError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client (validation or business-rule violation).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound("not found".to_owned()),
            RepositoryError::Conflict(msg) => Self::BadRequest(msg),
            other => Self::Database(other),
        }
    }
}

impl From<PlaceOrderError> for AppError {
    fn from(err: PlaceOrderError) -> Self {
        match err {
            PlaceOrderError::Repository(e) => e.into(),
            other => Self::BadRequest(other.to_string()),
        }
    }
}

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors with Sentry
        if matches!(self, Self::Database(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "API request error"
            );
        }

        let status = match &self {
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match self {
            Self::Database(_) => "internal server error".to_owned(),
            Self::NotFound(msg) | Self::BadRequest(msg) => msg,
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bookshop_core::{ItemId, MemberId};

    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("order not found: id=123".to_string());
        assert_eq!(err.to_string(), "Not found: order not found: id=123");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Database(RepositoryError::DataCorruption(
                "test".to_string()
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_repository_conflict_maps_to_bad_request() {
        let err: AppError = RepositoryError::Conflict("email already registered".to_owned()).into();
        assert_eq!(get_status(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_repository_not_found_maps_to_404() {
        let err: AppError = RepositoryError::NotFound.into();
        assert_eq!(get_status(err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_place_order_errors_map_to_bad_request() {
        let member: AppError = PlaceOrderError::MemberNotFound(MemberId::new(5)).into();
        assert!(matches!(&member, AppError::BadRequest(msg) if msg == "member not found: id=5"));
        assert_eq!(get_status(member), StatusCode::BAD_REQUEST);

        let item: AppError = PlaceOrderError::ItemNotFound(ItemId::new(7)).into();
        assert!(matches!(&item, AppError::BadRequest(msg) if msg == "item not found: id=7"));

        let stock: AppError = PlaceOrderError::InsufficientStock(ItemId::new(7)).into();
        assert!(
            matches!(&stock, AppError::BadRequest(msg) if msg == "insufficient stock for item: id=7")
        );
    }
}
