//! Item API endpoints.
//!
//! Capability checks live in the registry state machine; handlers here
//! only translate between the wire types and service calls.

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use protocol::{
    AcquireItemRequest, AvailableItemsResponse, CreateItemRequest, EditAcquisitionDateRequest,
    ItemDetailResponse, ItemListResponse, ItemResponse, MessageResponse, StatsResponse,
    UpdateItemRequest,
};
use registry::{ItemUpdate, NewItem};
use registry_store::RegistryStore;
use uuid::Uuid;

use crate::error::ServerResult;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Lists all items with their reservations, ordered by category then name.
pub async fn list_items<S: RegistryStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<ItemListResponse>> {
    let items = state.registry.list_item_details().await?;
    Ok(Json(ItemListResponse::new(items)))
}

/// Lists unacquired items nobody has reserved yet.
pub async fn list_available_items<S: RegistryStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<AvailableItemsResponse>> {
    let items = state.registry.list_available_items().await?;
    Ok(Json(AvailableItemsResponse::new(items)))
}

/// Returns the registry statistics projection.
pub async fn get_stats<S: RegistryStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<StatsResponse>> {
    let stats = state.registry.stats().await?;
    Ok(Json(StatsResponse::new(stats)))
}

/// Gets a single item with its reservations.
pub async fn get_item<S: RegistryStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<Uuid>,
) -> ServerResult<Json<ItemDetailResponse>> {
    let item = state.registry.get_item_detail(id).await?;
    Ok(Json(ItemDetailResponse::new(item)))
}

/// Creates a new item (administrator only).
pub async fn create_item<S: RegistryStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(current): Extension<CurrentUser>,
    Json(request): Json<CreateItemRequest>,
) -> ServerResult<Json<ItemResponse>> {
    let item = state
        .registry
        .create_item(
            current.actor(),
            NewItem {
                name: request.name,
                category: request.category,
                sub_category: request.sub_category,
                description: request.description,
                priority: request.priority,
            },
        )
        .await?;

    Ok(Json(ItemResponse::new(item)))
}

/// Updates an item field-wise (administrator only).
pub async fn update_item<S: RegistryStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateItemRequest>,
) -> ServerResult<Json<ItemResponse>> {
    let item = state
        .registry
        .update_item(
            current.actor(),
            id,
            ItemUpdate {
                name: request.name,
                category: request.category,
                sub_category: request.sub_category,
                description: request.description,
                priority: request.priority,
                acquired: request.acquired,
                comment: request.comment,
                acquired_at: request.acquired_at,
            },
        )
        .await?;

    Ok(Json(ItemResponse::new(item)))
}

/// Deletes an item and its reservations (administrator only).
pub async fn delete_item<S: RegistryStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> ServerResult<Json<MessageResponse>> {
    state.registry.delete_item(current.actor(), id).await?;
    Ok(Json(MessageResponse::new("item deleted")))
}

/// Marks an item as acquired (administrator only).
pub async fn acquire_item<S: RegistryStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<AcquireItemRequest>,
) -> ServerResult<Json<ItemResponse>> {
    let item = state
        .registry
        .mark_acquired(current.actor(), id, request.comment)
        .await?;
    Ok(Json(ItemResponse::new(item)))
}

/// Clears the acquired flag, preserving reservations (administrator only).
pub async fn unacquire_item<S: RegistryStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> ServerResult<Json<ItemResponse>> {
    let item = state.registry.unmark_acquired(current.actor(), id).await?;
    Ok(Json(ItemResponse::new(item)))
}

/// Edits the acquisition date of an acquired item (administrator only).
pub async fn edit_acquisition_date<S: RegistryStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<EditAcquisitionDateRequest>,
) -> ServerResult<Json<ItemResponse>> {
    let item = state
        .registry
        .edit_acquisition_date(current.actor(), id, request.acquired_at)
        .await?;
    Ok(Json(ItemResponse::new(item)))
}
