//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. Route handlers return `Result<T, AppError>`.
//!
//! Cart operations themselves never fail; everything here describes malformed
//! requests or rendering faults.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::actions::ActionError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// A UI action could not be dispatched.
    #[error("Action error: {0}")]
    Action(#[from] ActionError),

    /// Template rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Action(err) => match err {
                ActionError::UnknownAction(_) | ActionError::UnknownProduct(_) => {
                    StatusCode::NOT_FOUND
                }
                ActionError::MissingField(_) | ActionError::InvalidField { .. } => {
                    StatusCode::BAD_REQUEST
                }
                ActionError::Unregistered(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, %status, "Request rejected");
        }

        // Don't expose internal error details to clients
        let message = if status.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
pub fn add_breadcrumb(category: &str, message: &str) {
    sentry::add_breadcrumb(sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("libro-123".to_string());
        assert_eq!(err.to_string(), "Not found: libro-123");

        let err = AppError::from(ActionError::MissingField("price"));
        assert_eq!(err.to_string(), "Action error: missing field: price");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(ActionError::MissingField("id").into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(askama::Error::Fmt.into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(ActionError::UnknownAction("x".to_string()).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(
                ActionError::InvalidField {
                    field: "price",
                    reason: "nope".to_string()
                }
                .into()
            ),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(ActionError::Unregistered("cart-add").into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
