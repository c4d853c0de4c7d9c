//! Cloud inventory persistence for the Composable Information Machine
//!
//! This crate provides the two foundations a multi-cloud discovery system
//! builds on:
//!
//! - [`store::ResourceStore`]: typed, kind-partitioned CRUD over the closed
//!   [`ResourceKind`] catalog, backed by an in-process engine or a NATS
//!   JetStream KV bucket
//! - [`registry::AccountClientRegistry`]: per-account bundles of credentialed
//!   provider-API handles, built all-or-nothing at startup

pub mod config;
pub mod errors;
pub mod kind;
pub mod model;
pub mod providers;
pub mod registry;
pub mod store;
pub mod sync;

// Re-export commonly used types
pub use config::InventoryConfig;
pub use errors::{InventoryError, InventoryResult};
pub use kind::ResourceKind;
pub use model::{StoredObject, SyncDomain, SyncRecord};
pub use registry::{AccountClientRegistry, AccountId, CloudProvider, RegistryError};
pub use store::{Location, ResourceStore, StoreError, StoreResult};
