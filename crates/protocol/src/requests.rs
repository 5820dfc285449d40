//! API request types.

use chrono::{DateTime, Utc};
use entities::{Category, Priority};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Auth
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Items
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub category: Category,
    pub sub_category: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
}

/// Field-wise item update; omitted fields are left unchanged, empty
/// strings clear the optional text fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub sub_category: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub acquired: Option<bool>,
    pub comment: Option<String>,
    pub acquired_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AcquireItemRequest {
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditAcquisitionDateRequest {
    pub acquired_at: DateTime<Utc>,
}

// ============================================================================
// Reservations
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    pub item_id: Uuid,
    pub comment: Option<String>,
}
