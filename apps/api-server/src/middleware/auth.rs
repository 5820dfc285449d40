//! Authentication middleware.
//!
//! The bearer token is verified exactly once here; handlers downstream
//! read the authenticated identity from the request extensions and the
//! registry state machine enforces capability checks from there.

use std::sync::Arc;

use auth::{Claims, JwtManager};
use axum::{
    Json,
    extract::{Request, State},
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use registry::Actor;
use registry_store::RegistryStore;
use serde_json::json;
use uuid::Uuid;

use crate::state::AppState;

/// Authenticated user information.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// User ID.
    pub id: Uuid,
    /// User email.
    pub email: String,
    /// Whether the user holds administrator privileges.
    pub is_admin: bool,
}

impl CurrentUser {
    /// The actor this user represents in registry operations.
    pub fn actor(&self) -> Actor {
        Actor {
            user_id: self.id,
            is_admin: self.is_admin,
        }
    }
}

impl TryFrom<Claims> for CurrentUser {
    type Error = auth::AuthError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        Ok(Self {
            id: claims.user_id()?,
            email: claims.email,
            is_admin: claims.is_admin,
        })
    }
}

/// Extracts the JWT token from the Authorization header.
fn extract_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "success": false, "error": message })),
    )
        .into_response()
}

/// Validates a JWT token and returns the claims.
fn validate_token(jwt_manager: &JwtManager, token: &str) -> Result<Claims, Response> {
    jwt_manager
        .validate_token(token)
        .map_err(|_| unauthorized("Invalid token"))
}

/// Authentication middleware.
///
/// Extracts the JWT token from the Authorization header, validates it,
/// and stores the authenticated user in the request extensions.
pub async fn auth_middleware<S: RegistryStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = match extract_token(&request) {
        Some(token) => token,
        None => return unauthorized("Missing authorization header"),
    };

    let claims = match validate_token(&state.jwt_manager, token) {
        Ok(claims) => claims,
        Err(response) => return response,
    };

    match CurrentUser::try_from(claims) {
        Ok(user) => {
            request.extensions_mut().insert(user);
        }
        Err(_) => return unauthorized("Invalid token claims"),
    }

    next.run(request).await
}
