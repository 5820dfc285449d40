//! JWT and password authentication for Enxoval.
//!
//! This crate provides:
//! - JWT token generation and validation
//! - Argon2id password hashing and verification

mod error;
mod jwt;
mod password;

pub use error::*;
pub use jwt::*;
pub use password::*;

/// Default JWT expiration time in hours (7 days).
pub const DEFAULT_JWT_EXPIRATION_HOURS: u64 = 168;

/// Default JWT issuer.
pub const DEFAULT_JWT_ISSUER: &str = "enxoval";
