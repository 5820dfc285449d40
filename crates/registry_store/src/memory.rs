//! In-memory registry store implementation for testing.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use entities::{Item, Reservation, ReservationWithGuest, User};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{RegistryStore, StoreError, StoreResult};

/// In-memory registry store for tests and local development.
#[derive(Debug, Default)]
pub struct MemoryRegistryStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    items: Arc<RwLock<HashMap<Uuid, Item>>>,
    reservations: Arc<RwLock<HashMap<Uuid, Reservation>>>,
}

impl MemoryRegistryStore {
    /// Creates a new in-memory registry store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn sort_items(items: &mut [Item]) {
    items.sort_by(|a, b| {
        (a.category as usize, &a.name).cmp(&(b.category as usize, &b.name))
    });
}

#[async_trait]
impl RegistryStore for MemoryRegistryStore {
    // =========================================================================
    // User operations
    // =========================================================================

    async fn create_user(&self, user: User) -> StoreResult<User> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::already_exists("User", user.email));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn count_users(&self) -> StoreResult<u64> {
        let users = self.users.read().await;
        Ok(users.len() as u64)
    }

    // =========================================================================
    // Item operations
    // =========================================================================

    async fn create_item(&self, item: Item) -> StoreResult<Item> {
        let mut items = self.items.write().await;
        if items.contains_key(&item.id) {
            return Err(StoreError::already_exists("Item", item.id.to_string()));
        }
        items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn get_item(&self, id: Uuid) -> StoreResult<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn list_items(&self) -> StoreResult<Vec<Item>> {
        let items = self.items.read().await;
        let mut result: Vec<Item> = items.values().cloned().collect();
        sort_items(&mut result);
        Ok(result)
    }

    async fn list_available_items(&self) -> StoreResult<Vec<Item>> {
        let items = self.items.read().await;
        let reservations = self.reservations.read().await;
        let mut result: Vec<Item> = items
            .values()
            .filter(|i| !i.acquired && !reservations.values().any(|r| r.item_id == i.id))
            .cloned()
            .collect();
        sort_items(&mut result);
        Ok(result)
    }

    async fn update_item(&self, item: Item) -> StoreResult<Item> {
        let mut items = self.items.write().await;
        if !items.contains_key(&item.id) {
            return Err(StoreError::not_found("Item", item.id.to_string()));
        }
        items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn delete_item(&self, id: Uuid) -> StoreResult<()> {
        let mut items = self.items.write().await;
        if items.remove(&id).is_none() {
            return Err(StoreError::not_found("Item", id.to_string()));
        }
        // Cascade to the item's reservations.
        let mut reservations = self.reservations.write().await;
        reservations.retain(|_, r| r.item_id != id);
        Ok(())
    }

    // =========================================================================
    // Reservation operations
    // =========================================================================

    async fn create_reservation(&self, reservation: Reservation) -> StoreResult<Reservation> {
        let items = self.items.read().await;
        if !items.contains_key(&reservation.item_id) {
            return Err(StoreError::not_found(
                "Item",
                reservation.item_id.to_string(),
            ));
        }
        drop(items);

        let mut reservations = self.reservations.write().await;
        if reservations.contains_key(&reservation.id) {
            return Err(StoreError::already_exists(
                "Reservation",
                reservation.id.to_string(),
            ));
        }
        reservations.insert(reservation.id, reservation.clone());
        Ok(reservation)
    }

    async fn get_reservation(&self, id: Uuid) -> StoreResult<Option<Reservation>> {
        let reservations = self.reservations.read().await;
        Ok(reservations.get(&id).cloned())
    }

    async fn list_reservations_with_guest(
        &self,
        item_id: Option<Uuid>,
    ) -> StoreResult<Vec<ReservationWithGuest>> {
        let reservations = self.reservations.read().await;
        let users = self.users.read().await;

        let mut result: Vec<ReservationWithGuest> = reservations
            .values()
            .filter(|r| item_id.is_none_or(|id| r.item_id == id))
            .map(|r| {
                let guest = users
                    .get(&r.user_id)
                    .ok_or_else(|| StoreError::not_found("User", r.user_id.to_string()))?;
                Ok(ReservationWithGuest {
                    id: r.id,
                    item_id: r.item_id,
                    user_id: r.user_id,
                    guest_name: guest.name.clone(),
                    guest_email: guest.email.clone(),
                    comment: r.comment.clone(),
                    created_at: r.created_at,
                })
            })
            .collect::<StoreResult<_>>()?;

        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn delete_reservation(&self, id: Uuid) -> StoreResult<()> {
        let mut reservations = self.reservations.write().await;
        if reservations.remove(&id).is_none() {
            return Err(StoreError::not_found("Reservation", id.to_string()));
        }
        Ok(())
    }
}
