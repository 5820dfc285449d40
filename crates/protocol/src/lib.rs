//! JSON wire types for the Enxoval API.
//!
//! Every state-changing operation returns a uniform envelope: success
//! bodies carry `"success": true` plus the affected entity or list,
//! failures carry `"success": false` and a short human-readable message.

pub mod requests;
pub mod responses;

pub use requests::*;
pub use responses::*;
