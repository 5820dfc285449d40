//! Reservation API endpoints.

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use protocol::{CreateReservationRequest, MessageResponse, ReservationListResponse, ReservationResponse};
use registry_store::RegistryStore;
use uuid::Uuid;

use crate::error::ServerResult;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Reserves an item for the authenticated guest.
pub async fn create_reservation<S: RegistryStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(current): Extension<CurrentUser>,
    Json(request): Json<CreateReservationRequest>,
) -> ServerResult<Json<ReservationResponse>> {
    let reservation = state
        .registry
        .reserve(current.actor(), request.item_id, request.comment)
        .await?;

    Ok(Json(ReservationResponse::new(reservation)))
}

/// Withdraws a reservation (owner or administrator).
pub async fn delete_reservation<S: RegistryStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> ServerResult<Json<MessageResponse>> {
    state.registry.unreserve(current.actor(), id).await?;
    Ok(Json(MessageResponse::new("reservation deleted")))
}

/// Lists all reservations with guest details (administrator only).
pub async fn list_reservations<S: RegistryStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(current): Extension<CurrentUser>,
) -> ServerResult<Json<ReservationListResponse>> {
    let reservations = state.registry.list_reservations(current.actor()).await?;
    Ok(Json(ReservationListResponse::new(reservations)))
}
