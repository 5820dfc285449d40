//! Core entity definitions for Enxoval.
//!
//! This crate defines the data types shared across the Enxoval registry:
//! household items, guest reservations, users, and the derived statistics
//! projection.

mod item;
mod reservation;
mod stats;
mod user;

pub use item::*;
pub use reservation::*;
pub use stats::*;
pub use user::*;
