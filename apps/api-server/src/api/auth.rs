//! Authentication API endpoints.

use std::sync::Arc;

use axum::{Extension, Json, extract::State};
use entities::PublicUser;
use protocol::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
use registry::NewUser;
use registry_store::RegistryStore;

use crate::error::{ServerError, ServerResult};
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 6;

/// Registers a new user, returning a token and the sanitized user.
///
/// The first user ever registered is granted the admin flag.
pub async fn register<S: RegistryStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<RegisterRequest>,
) -> ServerResult<Json<AuthResponse>> {
    if request.password.len() < MIN_PASSWORD_LEN {
        return Err(ServerError::InvalidRequest(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    let password_hash = auth::hash_password(&request.password)?;

    let user = state
        .registry
        .register_user(NewUser {
            name: request.name,
            email: request.email,
            phone: request.phone,
            password_hash,
        })
        .await?;

    let token = state
        .jwt_manager
        .generate_token(user.id, user.email.clone(), user.is_admin)?;

    Ok(Json(AuthResponse::new(token, PublicUser::from(user))))
}

/// Authenticates an existing user, returning a token and the sanitized
/// user. Unknown email and wrong password are indistinguishable to the
/// caller.
pub async fn login<S: RegistryStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<LoginRequest>,
) -> ServerResult<Json<AuthResponse>> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(ServerError::InvalidRequest(
            "email and password are required".to_string(),
        ));
    }

    let invalid = || ServerError::Unauthenticated("invalid credentials".to_string());

    let user = state
        .registry
        .get_user_by_email(&request.email)
        .await?
        .ok_or_else(invalid)?;

    if !auth::verify_password(&request.password, &user.password_hash)? {
        return Err(invalid());
    }

    let token = state
        .jwt_manager
        .generate_token(user.id, user.email.clone(), user.is_admin)?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(AuthResponse::new(token, PublicUser::from(user))))
}

/// Returns the authenticated user's own record.
pub async fn get_current_user<S: RegistryStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(current): Extension<CurrentUser>,
) -> ServerResult<Json<UserResponse>> {
    let user = state.registry.get_user(current.id).await?;
    Ok(Json(UserResponse::new(PublicUser::from(user))))
}
