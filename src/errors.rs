//! Error types for inventory operations

use thiserror::Error;

use crate::registry::RegistryError;
use crate::store::StoreError;

/// Errors that can occur while assembling or running the inventory layer
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Resource store error
    #[error("Resource store error: {0}")]
    Store(#[from] StoreError),

    /// Account client registry error
    #[error("Client registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;
