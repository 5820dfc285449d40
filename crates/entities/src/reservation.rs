//! Guest reservation entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Item;

/// A guest's non-exclusive pledge to supply an item as a gift.
///
/// Several guests may hold reservations against the same item at the same
/// time; the UI surfaces all of them to support pooled gifting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique identifier.
    pub id: Uuid,
    /// The reserved item.
    pub item_id: Uuid,
    /// The guest who made the pledge.
    pub user_id: Uuid,
    /// Optional free-text comment from the guest.
    pub comment: Option<String>,
    /// When the reservation was made.
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Creates a new reservation timestamped now.
    pub fn new(item_id: Uuid, user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            item_id,
            user_id,
            comment: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the guest comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A reservation joined with the reserving guest's public details.
///
/// Read model for eager-loaded listings; never written back to the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationWithGuest {
    /// Reservation identifier.
    pub id: Uuid,
    /// The reserved item.
    pub item_id: Uuid,
    /// The guest who made the pledge.
    pub user_id: Uuid,
    /// Guest display name.
    pub guest_name: String,
    /// Guest email address.
    pub guest_email: String,
    /// Optional free-text comment from the guest.
    pub comment: Option<String>,
    /// When the reservation was made.
    pub created_at: DateTime<Utc>,
}

/// An item joined with its reservations.
///
/// Read model for listing endpoints; reservations are ordered most recent
/// first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDetail {
    /// The item itself, flattened into the detail view.
    #[serde(flatten)]
    pub item: Item,
    /// Reservations against the item, newest first.
    pub reservations: Vec<ReservationWithGuest>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    #[test]
    fn test_reservation_creation() {
        let item_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let reservation = Reservation::new(item_id, user_id).with_comment("vou comprar");

        assert_eq!(reservation.item_id, item_id);
        assert_eq!(reservation.user_id, user_id);
        assert_eq!(reservation.comment.as_deref(), Some("vou comprar"));
    }

    #[test]
    fn test_item_detail_flattens_item() {
        let detail = ItemDetail {
            item: Item::new("Jogo de Panelas", Category::Cozinha),
            reservations: Vec::new(),
        };

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["name"], "Jogo de Panelas");
        assert_eq!(json["category"], "cozinha");
        assert!(json["reservations"].as_array().unwrap().is_empty());
    }
}
