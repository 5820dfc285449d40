//! Registry error types.

use registry_store::StoreError;
use thiserror::Error;

/// Errors produced by the registry state machine.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Missing or malformed input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Item id does not resolve.
    #[error("Item not found")]
    ItemNotFound,

    /// Reservation id does not resolve.
    #[error("Reservation not found")]
    ReservationNotFound,

    /// User id does not resolve.
    #[error("User not found")]
    UserNotFound,

    /// Reserve attempt against an item that is already acquired.
    /// A business-rule rejection, not a system fault.
    #[error("Item already acquired")]
    AlreadyAcquired,

    /// The actor lacks the rights for the operation.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The persistence collaborator failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
