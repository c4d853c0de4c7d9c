// Copyright (c) 2025 - Cowboy AI, Inc.
//! Storage Engine Abstraction
//!
//! Engines hold raw serialized records, one collection per [`ResourceKind`].
//! They know nothing about payload types; the [`ResourceStore`](super::ResourceStore)
//! handles typing, validation, locking and lifecycle on top of them.
//!
//! # Engine Requirements
//!
//! 1. **Record atomicity**: a `get` never observes half of a `put`
//! 2. **Partitioning**: the same id in two kinds names two different records
//! 3. **Idempotent delete**: deleting a missing record succeeds
//! 4. **All-or-nothing clear**: `clear_all` empties every collection or none

use async_trait::async_trait;
use bytes::Bytes;

use crate::kind::ResourceKind;

/// Boxed error returned by engines, propagated verbatim by the store
pub type EngineError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Backing storage for the resource store
#[async_trait]
pub trait StorageEngine: Send + Sync {
    /// Short engine name used in logs
    fn name(&self) -> &'static str;

    /// Insert or overwrite a record
    async fn put(&self, kind: ResourceKind, id: &str, value: Bytes) -> EngineResult<()>;

    /// Fetch a record, `None` if absent
    async fn get(&self, kind: ResourceKind, id: &str) -> EngineResult<Option<Bytes>>;

    /// Every record currently in the kind's collection, in no particular order
    async fn list(&self, kind: ResourceKind) -> EngineResult<Vec<Bytes>>;

    /// Remove a record; missing records are not an error
    async fn delete(&self, kind: ResourceKind, id: &str) -> EngineResult<()>;

    /// Empty every collection as one unit
    async fn clear_all(&self) -> EngineResult<()>;

    /// Release engine resources
    async fn close(&self) -> EngineResult<()>;
}
