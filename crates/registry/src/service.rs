//! Registry service — the item/reservation state machine.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use entities::{
    Category, Item, ItemDetail, Priority, RegistryStats, Reservation, ReservationWithGuest, User,
};
use registry_store::RegistryStore;
use uuid::Uuid;

use crate::{RegistryError, RegistryResult};

/// The identity performing an operation.
///
/// Administrator status is decided by the explicit flag only; there is no
/// distinguished legacy user id.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    /// User ID.
    pub user_id: Uuid,
    /// Whether the user holds administrator privileges.
    pub is_admin: bool,
}

impl Actor {
    fn require_admin(&self) -> RegistryResult<()> {
        if self.is_admin {
            Ok(())
        } else {
            Err(RegistryError::Forbidden(
                "administrator privileges required".to_string(),
            ))
        }
    }
}

/// Input for item creation.
#[derive(Debug, Clone)]
pub struct NewItem {
    /// Item name (required, non-empty).
    pub name: String,
    /// Room/purpose category.
    pub category: Category,
    /// Optional sub-category label.
    pub sub_category: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Priority; defaults to `media` when absent.
    pub priority: Option<Priority>,
}

/// Field-wise item update. `None` fields are left unchanged; empty strings
/// clear the optional text fields.
#[derive(Debug, Clone, Default)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub sub_category: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub acquired: Option<bool>,
    pub comment: Option<String>,
    pub acquired_at: Option<DateTime<Utc>>,
}

/// Input for user registration.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Already-hashed password credential.
    pub password_hash: String,
}

/// The registry state machine.
///
/// Every state transition runs as one read-modify-write against the store;
/// the service itself keeps no mutable state between calls.
pub struct RegistryService<S: RegistryStore> {
    store: S,
}

impl<S: RegistryStore> RegistryService<S> {
    /// Creates a new registry service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // =========================================================================
    // User operations
    // =========================================================================

    /// Registers a new user. The first user ever registered is granted the
    /// admin flag; everyone after that starts as a regular user.
    pub async fn register_user(&self, new_user: NewUser) -> RegistryResult<User> {
        let name = new_user.name.trim();
        let email = new_user.email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(RegistryError::Validation(
                "name and email are required".to_string(),
            ));
        }

        if self.store.get_user_by_email(email).await?.is_some() {
            return Err(RegistryError::Validation(
                "email already in use".to_string(),
            ));
        }

        let is_first = self.store.count_users().await? == 0;

        let mut user = User::new(name, email, new_user.password_hash);
        user.phone = normalize_text(new_user.phone);
        user.is_admin = is_first;

        let user = self.store.create_user(user).await?;
        tracing::info!(user_id = %user.id, is_admin = user.is_admin, "User registered");
        Ok(user)
    }

    /// Gets a user by ID.
    pub async fn get_user(&self, id: Uuid) -> RegistryResult<User> {
        self.store
            .get_user(id)
            .await?
            .ok_or(RegistryError::UserNotFound)
    }

    /// Gets a user by email.
    pub async fn get_user_by_email(&self, email: &str) -> RegistryResult<Option<User>> {
        Ok(self.store.get_user_by_email(email).await?)
    }

    // =========================================================================
    // Item CRUD (administrator only)
    // =========================================================================

    /// Creates a new item.
    pub async fn create_item(&self, actor: Actor, new_item: NewItem) -> RegistryResult<Item> {
        actor.require_admin()?;

        let name = new_item.name.trim();
        if name.is_empty() {
            return Err(RegistryError::Validation("name is required".to_string()));
        }

        let mut item = Item::new(name, new_item.category);
        item.sub_category = normalize_text(new_item.sub_category);
        item.description = normalize_text(new_item.description);
        item.priority = new_item.priority.unwrap_or_default();

        let item = self.store.create_item(item).await?;
        tracing::info!(item_id = %item.id, category = %item.category, "Item created");
        Ok(item)
    }

    /// Updates an item field-wise. Clearing the acquired flag also clears
    /// the acquisition date; setting it without a date stamps now.
    pub async fn update_item(
        &self,
        actor: Actor,
        id: Uuid,
        update: ItemUpdate,
    ) -> RegistryResult<Item> {
        actor.require_admin()?;

        let mut item = self.fetch_item(id).await?;

        if let Some(name) = update.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(RegistryError::Validation("name cannot be empty".to_string()));
            }
            item.name = name;
        }
        if let Some(category) = update.category {
            item.category = category;
        }
        if let Some(sub_category) = update.sub_category {
            item.sub_category = normalize_text(Some(sub_category));
        }
        if let Some(description) = update.description {
            item.description = normalize_text(Some(description));
        }
        if let Some(priority) = update.priority {
            item.priority = priority;
        }
        if let Some(comment) = update.comment {
            item.comment = normalize_text(Some(comment));
        }
        if let Some(acquired) = update.acquired {
            item.acquired = acquired;
        }
        if let Some(acquired_at) = update.acquired_at {
            item.acquired_at = Some(acquired_at);
        }

        // Acquisition date exists exactly while the item is acquired.
        if item.acquired {
            if item.acquired_at.is_none() {
                item.acquired_at = Some(Utc::now());
            }
        } else {
            item.acquired_at = None;
        }

        item.updated_at = Utc::now();
        Ok(self.store.update_item(item).await?)
    }

    /// Deletes an item; its reservations go with it.
    pub async fn delete_item(&self, actor: Actor, id: Uuid) -> RegistryResult<()> {
        actor.require_admin()?;

        self.fetch_item(id).await?;
        self.store.delete_item(id).await?;
        tracing::info!(item_id = %id, "Item deleted");
        Ok(())
    }

    // =========================================================================
    // Item queries
    // =========================================================================

    /// Gets a single item with its reservations eager-loaded.
    pub async fn get_item_detail(&self, id: Uuid) -> RegistryResult<ItemDetail> {
        let item = self.fetch_item(id).await?;
        let reservations = self.store.list_reservations_with_guest(Some(id)).await?;
        Ok(ItemDetail { item, reservations })
    }

    /// Lists all items with reservations, ordered by category then name.
    pub async fn list_item_details(&self) -> RegistryResult<Vec<ItemDetail>> {
        let items = self.store.list_items().await?;
        let reservations = self.store.list_reservations_with_guest(None).await?;

        let mut by_item: HashMap<Uuid, Vec<ReservationWithGuest>> = HashMap::new();
        for reservation in reservations {
            by_item
                .entry(reservation.item_id)
                .or_default()
                .push(reservation);
        }

        Ok(items
            .into_iter()
            .map(|item| {
                let reservations = by_item.remove(&item.id).unwrap_or_default();
                ItemDetail { item, reservations }
            })
            .collect())
    }

    /// Lists unacquired items nobody has reserved yet.
    pub async fn list_available_items(&self) -> RegistryResult<Vec<Item>> {
        Ok(self.store.list_available_items().await?)
    }

    /// Computes the registry statistics projection.
    pub async fn stats(&self) -> RegistryResult<RegistryStats> {
        let items = self.store.list_items().await?;
        Ok(RegistryStats::compute(&items))
    }

    // =========================================================================
    // Reservations
    // =========================================================================

    /// Reserves an item for the acting guest.
    ///
    /// Reservations are non-exclusive: any number of guests may reserve the
    /// same item at the same time. Only an already-acquired item rejects
    /// new reservations.
    pub async fn reserve(
        &self,
        actor: Actor,
        item_id: Uuid,
        comment: Option<String>,
    ) -> RegistryResult<Reservation> {
        let item = self.fetch_item(item_id).await?;
        if item.acquired {
            return Err(RegistryError::AlreadyAcquired);
        }

        let mut reservation = Reservation::new(item_id, actor.user_id);
        reservation.comment = normalize_text(comment);

        let reservation = self.store.create_reservation(reservation).await?;
        tracing::info!(
            reservation_id = %reservation.id,
            item_id = %item_id,
            user_id = %actor.user_id,
            "Reservation created"
        );
        Ok(reservation)
    }

    /// Withdraws a reservation. Only its owner or an administrator may do
    /// so.
    pub async fn unreserve(&self, actor: Actor, reservation_id: Uuid) -> RegistryResult<()> {
        let reservation = self
            .store
            .get_reservation(reservation_id)
            .await?
            .ok_or(RegistryError::ReservationNotFound)?;

        if reservation.user_id != actor.user_id && !actor.is_admin {
            return Err(RegistryError::Forbidden(
                "you can only delete your own reservations".to_string(),
            ));
        }

        self.store.delete_reservation(reservation_id).await?;
        tracing::info!(reservation_id = %reservation_id, "Reservation deleted");
        Ok(())
    }

    /// Lists all reservations with guest details, newest first.
    /// Administrator only.
    pub async fn list_reservations(&self, actor: Actor) -> RegistryResult<Vec<ReservationWithGuest>> {
        actor.require_admin()?;
        Ok(self.store.list_reservations_with_guest(None).await?)
    }

    // =========================================================================
    // Acquisition transitions (administrator only)
    // =========================================================================

    /// Marks an item as acquired, stamping the acquisition date on the
    /// false-to-true edge. Re-invocation on an already acquired item is a
    /// no-op on the flag but still merges the comment.
    pub async fn mark_acquired(
        &self,
        actor: Actor,
        item_id: Uuid,
        comment: Option<String>,
    ) -> RegistryResult<Item> {
        actor.require_admin()?;

        let mut item = self.fetch_item(item_id).await?;
        if !item.acquired {
            item.acquired = true;
            item.acquired_at = Some(Utc::now());
        }
        if let Some(comment) = normalize_text(comment) {
            item.comment = Some(comment);
        }
        item.updated_at = Utc::now();

        let item = self.store.update_item(item).await?;
        tracing::info!(item_id = %item_id, "Item marked acquired");
        Ok(item)
    }

    /// Clears the acquired flag and the acquisition date. Existing
    /// reservations are preserved: un-acquiring does not retroactively
    /// invalidate who pledged to give the item.
    pub async fn unmark_acquired(&self, actor: Actor, item_id: Uuid) -> RegistryResult<Item> {
        actor.require_admin()?;

        let mut item = self.fetch_item(item_id).await?;
        item.acquired = false;
        item.acquired_at = None;
        item.updated_at = Utc::now();

        let item = self.store.update_item(item).await?;
        tracing::info!(item_id = %item_id, "Item unmarked acquired");
        Ok(item)
    }

    /// Edits the acquisition date of an acquired item. The date must not
    /// be in the future.
    pub async fn edit_acquisition_date(
        &self,
        actor: Actor,
        item_id: Uuid,
        new_date: DateTime<Utc>,
    ) -> RegistryResult<Item> {
        actor.require_admin()?;

        let mut item = self.fetch_item(item_id).await?;
        if !item.acquired {
            return Err(RegistryError::Validation(
                "item is not acquired".to_string(),
            ));
        }
        if new_date > Utc::now() {
            return Err(RegistryError::Validation(
                "acquisition date cannot be in the future".to_string(),
            ));
        }

        item.acquired_at = Some(new_date);
        item.updated_at = Utc::now();
        Ok(self.store.update_item(item).await?)
    }

    async fn fetch_item(&self, id: Uuid) -> RegistryResult<Item> {
        self.store
            .get_item(id)
            .await?
            .ok_or(RegistryError::ItemNotFound)
    }
}

/// Trims a free-text field, mapping empty strings to `None`.
fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry_store::MemoryRegistryStore;

    fn service() -> RegistryService<MemoryRegistryStore> {
        RegistryService::new(MemoryRegistryStore::new())
    }

    async fn register(
        service: &RegistryService<MemoryRegistryStore>,
        name: &str,
        email: &str,
    ) -> (User, Actor) {
        let user = service
            .register_user(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                phone: None,
                password_hash: "hash".to_string(),
            })
            .await
            .unwrap();
        let actor = Actor {
            user_id: user.id,
            is_admin: user.is_admin,
        };
        (user, actor)
    }

    fn new_item(name: &str, category: Category, priority: Priority) -> NewItem {
        NewItem {
            name: name.to_string(),
            category,
            sub_category: None,
            description: None,
            priority: Some(priority),
        }
    }

    #[tokio::test]
    async fn test_first_registrant_is_admin() {
        let service = service();

        let (first, _) = register(&service, "Ana", "ana@example.com").await;
        assert!(first.is_admin);

        let (second, _) = register(&service, "Bia", "bia@example.com").await;
        assert!(!second.is_admin);

        let (third, _) = register(&service, "Caio", "caio@example.com").await;
        assert!(!third.is_admin);
    }

    #[tokio::test]
    async fn test_duplicate_email_fails_validation() {
        let service = service();
        register(&service, "Ana", "ana@example.com").await;

        let result = service
            .register_user(NewUser {
                name: "Outra".to_string(),
                email: "ana@example.com".to_string(),
                phone: None,
                password_hash: "hash".to_string(),
            })
            .await;
        assert!(matches!(result, Err(RegistryError::Validation(_))));
    }

    #[tokio::test]
    async fn test_item_crud_requires_admin() {
        let service = service();
        let (_, admin) = register(&service, "Ana", "ana@example.com").await;
        let (_, guest) = register(&service, "Bia", "bia@example.com").await;

        let denied = service
            .create_item(guest, new_item("Fogão", Category::Cozinha, Priority::Essencial))
            .await;
        assert!(matches!(denied, Err(RegistryError::Forbidden(_))));

        let item = service
            .create_item(admin, new_item("Fogão", Category::Cozinha, Priority::Essencial))
            .await
            .unwrap();

        let denied = service.delete_item(guest, item.id).await;
        assert!(matches!(denied, Err(RegistryError::Forbidden(_))));

        service.delete_item(admin, item.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_reserve_on_acquired_item_fails_and_creates_nothing() {
        let service = service();
        let (_, admin) = register(&service, "Ana", "ana@example.com").await;
        let (_, guest) = register(&service, "Bia", "bia@example.com").await;

        let item = service
            .create_item(admin, new_item("Geladeira", Category::Cozinha, Priority::Essencial))
            .await
            .unwrap();
        service.mark_acquired(admin, item.id, None).await.unwrap();

        let result = service.reserve(guest, item.id, None).await;
        assert!(matches!(result, Err(RegistryError::AlreadyAcquired)));

        let detail = service.get_item_detail(item.id).await.unwrap();
        assert!(detail.reservations.is_empty());
    }

    #[tokio::test]
    async fn test_reservations_are_non_exclusive() {
        let service = service();
        let (_, admin) = register(&service, "Ana", "ana@example.com").await;
        let (_, guest_b) = register(&service, "Bia", "bia@example.com").await;
        let (_, guest_c) = register(&service, "Caio", "caio@example.com").await;

        let item = service
            .create_item(admin, new_item("Jogo de Panelas", Category::Cozinha, Priority::Alta))
            .await
            .unwrap();

        service.reserve(guest_b, item.id, None).await.unwrap();
        service.reserve(guest_c, item.id, None).await.unwrap();
        // The same guest may even pledge twice.
        service.reserve(guest_b, item.id, None).await.unwrap();

        let detail = service.get_item_detail(item.id).await.unwrap();
        assert_eq!(detail.reservations.len(), 3);
    }

    #[tokio::test]
    async fn test_unreserve_authorization() {
        let service = service();
        let (_, admin) = register(&service, "Ana", "ana@example.com").await;
        let (_, owner) = register(&service, "Bia", "bia@example.com").await;
        let (_, other) = register(&service, "Caio", "caio@example.com").await;

        let item = service
            .create_item(admin, new_item("Sofá", Category::SalaCopa, Priority::Alta))
            .await
            .unwrap();
        let reservation = service.reserve(owner, item.id, None).await.unwrap();

        // A stranger may not withdraw it; the reservation stays.
        let denied = service.unreserve(other, reservation.id).await;
        assert!(matches!(denied, Err(RegistryError::Forbidden(_))));
        assert_eq!(
            service.get_item_detail(item.id).await.unwrap().reservations.len(),
            1
        );

        // The owner may.
        service.unreserve(owner, reservation.id).await.unwrap();

        // And so may an admin.
        let reservation = service.reserve(owner, item.id, None).await.unwrap();
        service.unreserve(admin, reservation.id).await.unwrap();

        let missing = service.unreserve(admin, reservation.id).await;
        assert!(matches!(missing, Err(RegistryError::ReservationNotFound)));
    }

    #[tokio::test]
    async fn test_acquisition_date_tracks_acquired_flag() {
        let service = service();
        let (_, admin) = register(&service, "Ana", "ana@example.com").await;

        let item = service
            .create_item(admin, new_item("Cama", Category::Quarto, Priority::Essencial))
            .await
            .unwrap();
        assert!(item.acquired_at.is_none());

        let item = service.mark_acquired(admin, item.id, None).await.unwrap();
        assert!(item.acquired);
        assert!(item.acquired_at.is_some());

        // Idempotent re-invocation keeps the original date.
        let original_date = item.acquired_at;
        let item = service
            .mark_acquired(admin, item.id, Some("presente da madrinha".to_string()))
            .await
            .unwrap();
        assert_eq!(item.acquired_at, original_date);
        assert_eq!(item.comment.as_deref(), Some("presente da madrinha"));

        let item = service.unmark_acquired(admin, item.id).await.unwrap();
        assert!(!item.acquired);
        assert!(item.acquired_at.is_none());
    }

    #[tokio::test]
    async fn test_unmark_acquired_preserves_reservations() {
        let service = service();
        let (_, admin) = register(&service, "Ana", "ana@example.com").await;
        let (_, guest) = register(&service, "Bia", "bia@example.com").await;

        let item = service
            .create_item(admin, new_item("Edredom", Category::Quarto, Priority::Media))
            .await
            .unwrap();
        service.reserve(guest, item.id, None).await.unwrap();
        service.mark_acquired(admin, item.id, None).await.unwrap();
        service.unmark_acquired(admin, item.id).await.unwrap();

        let detail = service.get_item_detail(item.id).await.unwrap();
        assert_eq!(detail.reservations.len(), 1);
    }

    #[tokio::test]
    async fn test_edit_acquisition_date_rules() {
        let service = service();
        let (_, admin) = register(&service, "Ana", "ana@example.com").await;

        let item = service
            .create_item(admin, new_item("Mesa", Category::SalaCopa, Priority::Alta))
            .await
            .unwrap();

        // Not acquired yet: editing the date is invalid.
        let past = Utc::now() - chrono::Duration::days(3);
        let result = service.edit_acquisition_date(admin, item.id, past).await;
        assert!(matches!(result, Err(RegistryError::Validation(_))));

        service.mark_acquired(admin, item.id, None).await.unwrap();

        // Future dates are rejected.
        let future = Utc::now() + chrono::Duration::days(1);
        let result = service.edit_acquisition_date(admin, item.id, future).await;
        assert!(matches!(result, Err(RegistryError::Validation(_))));

        let item = service
            .edit_acquisition_date(admin, item.id, past)
            .await
            .unwrap();
        assert_eq!(item.acquired_at, Some(past));
    }

    #[tokio::test]
    async fn test_update_item_clears_date_with_flag() {
        let service = service();
        let (_, admin) = register(&service, "Ana", "ana@example.com").await;

        let item = service
            .create_item(admin, new_item("Tapete", Category::SalaCopa, Priority::Baixa))
            .await
            .unwrap();

        // Setting acquired via a plain update stamps the date.
        let item = service
            .update_item(
                admin,
                item.id,
                ItemUpdate {
                    acquired: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(item.acquired_at.is_some());

        // Clearing the flag clears the date, and empty comments become None.
        let item = service
            .update_item(
                admin,
                item.id,
                ItemUpdate {
                    acquired: Some(false),
                    comment: Some("  ".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(!item.acquired);
        assert!(item.acquired_at.is_none());
        assert!(item.comment.is_none());
    }

    #[tokio::test]
    async fn test_stats_cover_all_categories() {
        let service = service();
        let (_, admin) = register(&service, "Ana", "ana@example.com").await;

        let item = service
            .create_item(admin, new_item("Fogão", Category::Cozinha, Priority::Essencial))
            .await
            .unwrap();
        service.mark_acquired(admin, item.id, None).await.unwrap();
        service
            .create_item(admin, new_item("Chuveiro", Category::BanheiroQuintal, Priority::Alta))
            .await
            .unwrap();

        let stats = service.stats().await.unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.acquired, 1);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.completion_pct, 50.0);
        assert_eq!(stats.per_category.len(), 4);
        assert_eq!(stats.per_category["quarto"].total, 0);
        assert_eq!(stats.per_category["sala-copa"].total, 0);
    }

    /// End-to-end walkthrough: first registrant becomes admin, a guest
    /// reserves an item, the admin acquires it, then deletes it and the
    /// reservation disappears with it.
    #[tokio::test]
    async fn test_full_registry_walkthrough() {
        let service = service();

        let (user_a, admin) = register(&service, "A", "a@example.com").await;
        assert!(user_a.is_admin);
        let (user_b, guest) = register(&service, "B", "b@example.com").await;
        assert!(!user_b.is_admin);

        let item = service
            .create_item(admin, new_item("Fogão", Category::Cozinha, Priority::Essencial))
            .await
            .unwrap();

        let reservation = service
            .reserve(guest, item.id, Some("vou comprar".to_string()))
            .await
            .unwrap();
        let detail = service.get_item_detail(item.id).await.unwrap();
        assert!(!detail.item.acquired);
        assert_eq!(detail.reservations.len(), 1);
        assert_eq!(detail.reservations[0].comment.as_deref(), Some("vou comprar"));

        let item = service.mark_acquired(admin, item.id, None).await.unwrap();
        assert!(item.acquired);
        assert!(item.acquired_at.is_some());
        // B's reservation is still listed.
        let detail = service.get_item_detail(item.id).await.unwrap();
        assert_eq!(detail.reservations.len(), 1);

        service.delete_item(admin, item.id).await.unwrap();
        let result = service.unreserve(guest, reservation.id).await;
        assert!(matches!(result, Err(RegistryError::ReservationNotFound)));
    }
}
