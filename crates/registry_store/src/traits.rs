//! Registry store trait definitions.

use async_trait::async_trait;
use entities::{Item, Reservation, ReservationWithGuest, User};
use uuid::Uuid;

use crate::StoreResult;

/// Trait for registry storage operations.
///
/// Implementations own ordering: item listings come back ordered by
/// category then name, reservation listings newest first.
#[async_trait]
pub trait RegistryStore: Send + Sync {
    // =========================================================================
    // User operations
    // =========================================================================

    /// Creates a new user. Fails with `AlreadyExists` when the email is
    /// already registered.
    async fn create_user(&self, user: User) -> StoreResult<User>;

    /// Gets a user by ID.
    async fn get_user(&self, id: Uuid) -> StoreResult<Option<User>>;

    /// Gets a user by email.
    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Counts all registered users.
    async fn count_users(&self) -> StoreResult<u64>;

    // =========================================================================
    // Item operations
    // =========================================================================

    /// Creates a new item.
    async fn create_item(&self, item: Item) -> StoreResult<Item>;

    /// Gets an item by ID.
    async fn get_item(&self, id: Uuid) -> StoreResult<Option<Item>>;

    /// Lists all items, ordered by category then name.
    async fn list_items(&self) -> StoreResult<Vec<Item>>;

    /// Lists unacquired items with no reservations, ordered by category
    /// then name.
    async fn list_available_items(&self) -> StoreResult<Vec<Item>>;

    /// Updates an item.
    async fn update_item(&self, item: Item) -> StoreResult<Item>;

    /// Deletes an item together with all of its reservations.
    async fn delete_item(&self, id: Uuid) -> StoreResult<()>;

    // =========================================================================
    // Reservation operations
    // =========================================================================

    /// Creates a new reservation.
    async fn create_reservation(&self, reservation: Reservation) -> StoreResult<Reservation>;

    /// Gets a reservation by ID.
    async fn get_reservation(&self, id: Uuid) -> StoreResult<Option<Reservation>>;

    /// Lists reservations joined with the reserving guest, newest first.
    /// When `item_id` is given, only that item's reservations are returned.
    async fn list_reservations_with_guest(
        &self,
        item_id: Option<Uuid>,
    ) -> StoreResult<Vec<ReservationWithGuest>>;

    /// Deletes a reservation.
    async fn delete_reservation(&self, id: Uuid) -> StoreResult<()>;
}
