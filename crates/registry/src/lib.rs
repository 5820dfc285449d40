//! Registry state machine for Enxoval.
//!
//! This crate is the single authoritative home of the registry business
//! rules: the item acquisition lifecycle, guest reservations, the access
//! control gate, and the derived statistics projection. The HTTP layer
//! routes to it and renders its results; it never re-implements the rules.

mod error;
mod service;

pub use error::*;
pub use service::*;
