//! Server error types.

use auth::AuthError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use registry::RegistryError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Authentication required or credential rejected.
    #[error("{0}")]
    Unauthenticated(String),

    /// Permission denied.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Business-rule rejection (e.g. reserving an acquired item).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RegistryError> for ServerError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::Validation(msg) => ServerError::InvalidRequest(msg),
            RegistryError::ItemNotFound => ServerError::NotFound("item not found".to_string()),
            RegistryError::ReservationNotFound => {
                ServerError::NotFound("reservation not found".to_string())
            }
            RegistryError::UserNotFound => ServerError::NotFound("user not found".to_string()),
            RegistryError::AlreadyAcquired => {
                ServerError::Conflict("item already acquired".to_string())
            }
            RegistryError::Forbidden(msg) => ServerError::PermissionDenied(msg),
            RegistryError::Store(e) => {
                tracing::error!(error = %e, "Store operation failed");
                ServerError::Internal("internal server error".to_string())
            }
        }
    }
}

impl From<AuthError> for ServerError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Crypto(msg) => {
                tracing::error!(error = %msg, "Password hashing failed");
                ServerError::Internal("internal server error".to_string())
            }
            other => ServerError::Unauthenticated(other.to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ServerError::Unauthenticated(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            ServerError::PermissionDenied(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ServerError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            ServerError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = json!({
            "success": false,
            "error": message,
        });

        (status, Json(body)).into_response()
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_errors_map_to_status_categories() {
        let cases = [
            (
                ServerError::from(RegistryError::Validation("bad".into())),
                StatusCode::BAD_REQUEST,
            ),
            (
                ServerError::from(RegistryError::ItemNotFound),
                StatusCode::NOT_FOUND,
            ),
            (
                ServerError::from(RegistryError::AlreadyAcquired),
                StatusCode::CONFLICT,
            ),
            (
                ServerError::from(RegistryError::Forbidden("no".into())),
                StatusCode::FORBIDDEN,
            ),
        ];

        for (error, expected) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_store_errors_do_not_leak_detail() {
        let error = ServerError::from(RegistryError::Store(
            registry_store::StoreError::Other("connection refused to 10.0.0.5".into()),
        ));
        match error {
            ServerError::Internal(msg) => assert_eq!(msg, "internal server error"),
            other => panic!("expected Internal, got {other:?}"),
        }
    }
}
