//! Server middleware.

mod auth;

pub use auth::*;
