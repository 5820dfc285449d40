//! API response types.
//!
//! All bodies carry the uniform `success` envelope flag.

use chrono::{DateTime, Utc};
use entities::{Item, ItemDetail, PublicUser, RegistryStats, Reservation, ReservationWithGuest};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub user: PublicUser,
}

impl AuthResponse {
    pub fn new(token: String, user: PublicUser) -> Self {
        Self {
            success: true,
            token,
            user,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: PublicUser,
}

impl UserResponse {
    pub fn new(user: PublicUser) -> Self {
        Self {
            success: true,
            user,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemResponse {
    pub success: bool,
    pub item: Item,
}

impl ItemResponse {
    pub fn new(item: Item) -> Self {
        Self {
            success: true,
            item,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDetailResponse {
    pub success: bool,
    pub item: ItemDetail,
}

impl ItemDetailResponse {
    pub fn new(item: ItemDetail) -> Self {
        Self {
            success: true,
            item,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemListResponse {
    pub success: bool,
    pub items: Vec<ItemDetail>,
}

impl ItemListResponse {
    pub fn new(items: Vec<ItemDetail>) -> Self {
        Self {
            success: true,
            items,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableItemsResponse {
    pub success: bool,
    pub items: Vec<Item>,
}

impl AvailableItemsResponse {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            success: true,
            items,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: RegistryStats,
}

impl StatsResponse {
    pub fn new(stats: RegistryStats) -> Self {
        Self {
            success: true,
            stats,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationResponse {
    pub success: bool,
    pub reservation: Reservation,
}

impl ReservationResponse {
    pub fn new(reservation: Reservation) -> Self {
        Self {
            success: true,
            reservation,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationListResponse {
    pub success: bool,
    pub reservations: Vec<ReservationWithGuest>,
}

impl ReservationListResponse {
    pub fn new(reservations: Vec<ReservationWithGuest>) -> Self {
        Self {
            success: true,
            reservations,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: "API funcionando corretamente".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Failure envelope. Built by the server's error type; defined here so
/// clients can decode it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}
