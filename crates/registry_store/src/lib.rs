//! Registry storage for Enxoval.
//!
//! This crate provides a storage abstraction for items, users, and
//! reservations. It ships an in-memory implementation for tests and a
//! SQLite implementation backed by a single process-owned connection pool.

mod error;
mod memory;
mod sqlite;
mod traits;

pub use error::*;
pub use memory::*;
pub use sqlite::*;
pub use traits::*;
