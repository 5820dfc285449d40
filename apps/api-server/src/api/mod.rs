//! API endpoints.

pub mod auth;
pub mod items;
pub mod reservations;

use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{delete, get, post, put},
};
use protocol::HealthResponse;
use registry_store::RegistryStore;

use crate::state::AppState;

/// Routes that do not require a credential.
pub fn public_router<S: RegistryStore + 'static>() -> Router<Arc<AppState<S>>> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
}

/// Routes behind the authentication middleware.
pub fn protected_router<S: RegistryStore + 'static>() -> Router<Arc<AppState<S>>> {
    Router::new()
        // Auth
        .route("/api/auth/me", get(auth::get_current_user))
        // Items
        .route("/api/items", get(items::list_items))
        .route("/api/items", post(items::create_item))
        .route("/api/items/available", get(items::list_available_items))
        .route("/api/items/stats", get(items::get_stats))
        .route("/api/items/:id", get(items::get_item))
        .route("/api/items/:id", put(items::update_item))
        .route("/api/items/:id", delete(items::delete_item))
        .route("/api/items/:id/acquire", post(items::acquire_item))
        .route("/api/items/:id/unacquire", post(items::unacquire_item))
        .route(
            "/api/items/:id/acquisition-date",
            put(items::edit_acquisition_date),
        )
        // Reservations
        .route("/api/reservations", post(reservations::create_reservation))
        .route("/api/reservations", get(reservations::list_reservations))
        .route(
            "/api/reservations/:id",
            delete(reservations::delete_reservation),
        )
}

/// Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
