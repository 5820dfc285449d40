//! User entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered participant: couple member, administrator, or guest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address, unique across all users.
    pub email: String,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Salted password hash. Never serialized to API responses; the
    /// [`PublicUser`] view is used there instead.
    pub password_hash: String,
    /// Whether the user holds administrator privileges.
    pub is_admin: bool,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
    /// When this record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new non-admin user.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            phone: None,
            password_hash: password_hash.into(),
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Grants administrator privileges.
    pub fn as_admin(mut self) -> Self {
        self.is_admin = true;
        self
    }
}

/// User view safe to return over the wire (no credential material).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Whether the user holds administrator privileges.
    pub is_admin: bool,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
    /// When this record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            is_admin: user.is_admin,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("Ana", "ana@example.com", "$argon2id$fake").with_phone("11 99999-0000");

        assert_eq!(user.name, "Ana");
        assert_eq!(user.email, "ana@example.com");
        assert_eq!(user.phone.as_deref(), Some("11 99999-0000"));
        assert!(!user.is_admin);
    }

    #[test]
    fn test_public_user_strips_password_hash() {
        let user = User::new("Ana", "ana@example.com", "$argon2id$fake").as_admin();
        let public = PublicUser::from(user);

        let json = serde_json::to_value(&public).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["is_admin"], true);
    }
}
