//! SQLite registry store implementation.
//!
//! One `SqlitePool` is owned by the process and shared across requests;
//! each operation acquires a connection from the pool for its duration.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use entities::{Category, Item, Priority, Reservation, ReservationWithGuest, User};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use uuid::Uuid;

use crate::{RegistryStore, StoreError, StoreResult};

/// Orders item rows by the fixed category enumeration, then by name.
const ITEM_ORDER: &str = "ORDER BY CASE category \
     WHEN 'cozinha' THEN 0 \
     WHEN 'sala-copa' THEN 1 \
     WHEN 'banheiro-quintal' THEN 2 \
     WHEN 'quarto' THEN 3 \
     ELSE 4 END, name";

const SELECT_ITEM: &str = "SELECT id, name, category, sub_category, description, priority, \
     acquired, comment, acquired_at, created_at, updated_at FROM items";

/// SQLite-backed registry store.
#[derive(Debug, Clone)]
pub struct SqliteRegistryStore {
    pool: SqlitePool,
}

impl SqliteRegistryStore {
    /// Connects to the given database URL and bootstraps the schema.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .connect(database_url)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// Wraps an existing pool (used by tests).
    pub fn with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn init_schema(&self) -> StoreResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                phone TEXT,
                password_hash TEXT NOT NULL,
                is_admin INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS items (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                sub_category TEXT,
                description TEXT,
                priority TEXT NOT NULL,
                acquired INTEGER NOT NULL DEFAULT 0,
                comment TEXT,
                acquired_at TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS reservations (
                id TEXT PRIMARY KEY,
                item_id TEXT NOT NULL REFERENCES items(id),
                user_id TEXT NOT NULL REFERENCES users(id),
                comment TEXT,
                created_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_reservations_item ON reservations(item_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn parse_uuid(value: &str) -> StoreResult<Uuid> {
    value
        .parse()
        .map_err(|_| StoreError::CorruptRow(format!("invalid uuid: {value}")))
}

fn user_from_row(row: &SqliteRow) -> StoreResult<User> {
    Ok(User {
        id: parse_uuid(&row.try_get::<String, _>("id")?)?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        password_hash: row.try_get("password_hash")?,
        is_admin: row.try_get("is_admin")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
        updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
    })
}

fn item_from_row(row: &SqliteRow) -> StoreResult<Item> {
    let category: String = row.try_get("category")?;
    let priority: String = row.try_get("priority")?;

    Ok(Item {
        id: parse_uuid(&row.try_get::<String, _>("id")?)?,
        name: row.try_get("name")?,
        category: category
            .parse::<Category>()
            .map_err(StoreError::CorruptRow)?,
        sub_category: row.try_get("sub_category")?,
        description: row.try_get("description")?,
        priority: priority
            .parse::<Priority>()
            .map_err(StoreError::CorruptRow)?,
        acquired: row.try_get("acquired")?,
        comment: row.try_get("comment")?,
        acquired_at: row.try_get::<Option<DateTime<Utc>>, _>("acquired_at")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
        updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
    })
}

fn reservation_from_row(row: &SqliteRow) -> StoreResult<Reservation> {
    Ok(Reservation {
        id: parse_uuid(&row.try_get::<String, _>("id")?)?,
        item_id: parse_uuid(&row.try_get::<String, _>("item_id")?)?,
        user_id: parse_uuid(&row.try_get::<String, _>("user_id")?)?,
        comment: row.try_get("comment")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
    })
}

fn reservation_with_guest_from_row(row: &SqliteRow) -> StoreResult<ReservationWithGuest> {
    Ok(ReservationWithGuest {
        id: parse_uuid(&row.try_get::<String, _>("id")?)?,
        item_id: parse_uuid(&row.try_get::<String, _>("item_id")?)?,
        user_id: parse_uuid(&row.try_get::<String, _>("user_id")?)?,
        guest_name: row.try_get("guest_name")?,
        guest_email: row.try_get("guest_email")?,
        comment: row.try_get("comment")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
    })
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[async_trait]
impl RegistryStore for SqliteRegistryStore {
    // =========================================================================
    // User operations
    // =========================================================================

    async fn create_user(&self, user: User) -> StoreResult<User> {
        let result = sqlx::query(
            "INSERT INTO users (id, name, email, phone, password_hash, is_admin, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.password_hash)
        .bind(user.is_admin)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(user),
            Err(e) if is_unique_violation(&e) => {
                Err(StoreError::already_exists("User", user.email))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn get_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, name, email, phone, password_hash, is_admin, created_at, updated_at \
             FROM users WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, name, email, phone, password_hash, is_admin, created_at, updated_at \
             FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn count_users(&self) -> StoreResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }

    // =========================================================================
    // Item operations
    // =========================================================================

    async fn create_item(&self, item: Item) -> StoreResult<Item> {
        sqlx::query(
            "INSERT INTO items (id, name, category, sub_category, description, priority, \
             acquired, comment, acquired_at, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(item.id.to_string())
        .bind(&item.name)
        .bind(item.category.as_str())
        .bind(&item.sub_category)
        .bind(&item.description)
        .bind(item.priority.as_str())
        .bind(item.acquired)
        .bind(&item.comment)
        .bind(item.acquired_at)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(item)
    }

    async fn get_item(&self, id: Uuid) -> StoreResult<Option<Item>> {
        let row = sqlx::query(&format!("{SELECT_ITEM} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(item_from_row).transpose()
    }

    async fn list_items(&self) -> StoreResult<Vec<Item>> {
        let rows = sqlx::query(&format!("{SELECT_ITEM} {ITEM_ORDER}"))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(item_from_row).collect()
    }

    async fn list_available_items(&self) -> StoreResult<Vec<Item>> {
        let rows = sqlx::query(&format!(
            "{SELECT_ITEM} WHERE acquired = 0 \
             AND id NOT IN (SELECT item_id FROM reservations) {ITEM_ORDER}"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(item_from_row).collect()
    }

    async fn update_item(&self, item: Item) -> StoreResult<Item> {
        let result = sqlx::query(
            "UPDATE items SET name = ?, category = ?, sub_category = ?, description = ?, \
             priority = ?, acquired = ?, comment = ?, acquired_at = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(&item.name)
        .bind(item.category.as_str())
        .bind(&item.sub_category)
        .bind(&item.description)
        .bind(item.priority.as_str())
        .bind(item.acquired)
        .bind(&item.comment)
        .bind(item.acquired_at)
        .bind(item.updated_at)
        .bind(item.id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("Item", item.id.to_string()));
        }
        Ok(item)
    }

    async fn delete_item(&self, id: Uuid) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM reservations WHERE item_id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("Item", id.to_string()));
        }

        tx.commit().await?;
        Ok(())
    }

    // =========================================================================
    // Reservation operations
    // =========================================================================

    async fn create_reservation(&self, reservation: Reservation) -> StoreResult<Reservation> {
        sqlx::query(
            "INSERT INTO reservations (id, item_id, user_id, comment, created_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(reservation.id.to_string())
        .bind(reservation.item_id.to_string())
        .bind(reservation.user_id.to_string())
        .bind(&reservation.comment)
        .bind(reservation.created_at)
        .execute(&self.pool)
        .await?;

        Ok(reservation)
    }

    async fn get_reservation(&self, id: Uuid) -> StoreResult<Option<Reservation>> {
        let row = sqlx::query(
            "SELECT id, item_id, user_id, comment, created_at FROM reservations WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(reservation_from_row).transpose()
    }

    async fn list_reservations_with_guest(
        &self,
        item_id: Option<Uuid>,
    ) -> StoreResult<Vec<ReservationWithGuest>> {
        let base = "SELECT r.id, r.item_id, r.user_id, r.comment, r.created_at, \
             u.name AS guest_name, u.email AS guest_email \
             FROM reservations r JOIN users u ON u.id = r.user_id";

        let rows = match item_id {
            Some(id) => {
                sqlx::query(&format!(
                    "{base} WHERE r.item_id = ? ORDER BY r.created_at DESC"
                ))
                .bind(id.to_string())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(&format!("{base} ORDER BY r.created_at DESC"))
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        rows.iter().map(reservation_with_guest_from_row).collect()
    }

    async fn delete_reservation(&self, id: Uuid) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("Reservation", id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn temp_store() -> SqliteRegistryStore {
        let path = std::env::temp_dir().join(format!("enxoval-test-{}.db", Uuid::new_v4()));
        let url = format!("sqlite://{}?mode=rwc", path.display());
        SqliteRegistryStore::connect(&url).await.unwrap()
    }

    #[tokio::test]
    async fn test_item_round_trip() {
        let store = temp_store().await;

        let item = Item::new("Fogão", Category::Cozinha)
            .with_sub_category("Eletrodomésticos e Equipamentos")
            .with_description("Fogão 4 ou 5 bocas com forno")
            .with_priority(Priority::Essencial);
        let created = store.create_item(item.clone()).await.unwrap();

        let fetched = store.get_item(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Fogão");
        assert_eq!(fetched.category, Category::Cozinha);
        assert_eq!(fetched.priority, Priority::Essencial);
        assert!(!fetched.acquired);
        assert!(fetched.acquired_at.is_none());
    }

    #[tokio::test]
    async fn test_unique_email_enforced_by_schema() {
        let store = temp_store().await;

        store
            .create_user(User::new("Ana", "ana@example.com", "hash"))
            .await
            .unwrap();
        let result = store
            .create_user(User::new("Outra", "ana@example.com", "hash"))
            .await;
        assert!(matches!(result, Err(StoreError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_delete_item_cascades_in_transaction() {
        let store = temp_store().await;

        let guest = store
            .create_user(User::new("Bia", "bia@example.com", "hash"))
            .await
            .unwrap();
        let item = store
            .create_item(Item::new("Fogão", Category::Cozinha))
            .await
            .unwrap();
        let reservation = store
            .create_reservation(Reservation::new(item.id, guest.id).with_comment("vou comprar"))
            .await
            .unwrap();

        store.delete_item(item.id).await.unwrap();

        assert!(store.get_item(item.id).await.unwrap().is_none());
        assert!(store.get_reservation(reservation.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reservations_join_guest_newest_first() {
        let store = temp_store().await;

        let guest = store
            .create_user(User::new("Bia", "bia@example.com", "hash"))
            .await
            .unwrap();
        let item = store
            .create_item(Item::new("Jogo de Panelas", Category::Cozinha))
            .await
            .unwrap();

        let mut older = Reservation::new(item.id, guest.id);
        older.created_at = older.created_at - chrono::Duration::hours(1);
        store.create_reservation(older.clone()).await.unwrap();
        let newer = store
            .create_reservation(Reservation::new(item.id, guest.id))
            .await
            .unwrap();

        let listed = store
            .list_reservations_with_guest(Some(item.id))
            .await
            .unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, newer.id);
        assert_eq!(listed[0].guest_name, "Bia");
        assert_eq!(listed[1].id, older.id);
    }
}
