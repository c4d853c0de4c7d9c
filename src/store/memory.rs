// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-process storage engine
//!
//! Each collection sits behind its own lock so different kinds never contend.
//! Records are immutable [`Bytes`]; replacing one is a single map insert, so
//! readers see either the old or the new record.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::engine::{EngineError, EngineResult, StorageEngine};
use crate::kind::ResourceKind;

type Collection = HashMap<String, Bytes>;

/// Embedded engine keeping all collections in memory
pub struct MemoryEngine {
    collections: HashMap<ResourceKind, RwLock<Collection>>,
}

impl MemoryEngine {
    pub fn new() -> Self {
        Self {
            collections: ResourceKind::ALL
                .iter()
                .map(|kind| (*kind, RwLock::new(Collection::new())))
                .collect(),
        }
    }

    fn collection(&self, kind: ResourceKind) -> EngineResult<&RwLock<Collection>> {
        self.collections
            .get(&kind)
            .ok_or_else(|| EngineError::from(format!("no collection for kind {}", kind)))
    }

    fn read(&self, kind: ResourceKind) -> EngineResult<RwLockReadGuard<'_, Collection>> {
        self.collection(kind)?
            .read()
            .map_err(|_| EngineError::from(format!("collection {} lock poisoned", kind)))
    }

    fn write(&self, kind: ResourceKind) -> EngineResult<RwLockWriteGuard<'_, Collection>> {
        self.collection(kind)?
            .write()
            .map_err(|_| EngineError::from(format!("collection {} lock poisoned", kind)))
    }

    /// Number of records across all collections
    pub fn record_count(&self) -> EngineResult<usize> {
        let mut total = 0;
        for kind in ResourceKind::ALL {
            total += self.read(kind)?.len();
        }
        Ok(total)
    }
}

impl Default for MemoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageEngine for MemoryEngine {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn put(&self, kind: ResourceKind, id: &str, value: Bytes) -> EngineResult<()> {
        self.write(kind)?.insert(id.to_string(), value);
        Ok(())
    }

    async fn get(&self, kind: ResourceKind, id: &str) -> EngineResult<Option<Bytes>> {
        Ok(self.read(kind)?.get(id).cloned())
    }

    async fn list(&self, kind: ResourceKind) -> EngineResult<Vec<Bytes>> {
        Ok(self.read(kind)?.values().cloned().collect())
    }

    async fn delete(&self, kind: ResourceKind, id: &str) -> EngineResult<()> {
        self.write(kind)?.remove(id);
        Ok(())
    }

    async fn clear_all(&self) -> EngineResult<()> {
        // Take every lock in catalog order before touching anything.
        let mut guards = Vec::with_capacity(ResourceKind::ALL.len());
        for kind in ResourceKind::ALL {
            guards.push(self.write(kind)?);
        }
        for guard in guards.iter_mut() {
            guard.clear();
        }
        Ok(())
    }

    async fn close(&self) -> EngineResult<()> {
        Ok(())
    }
}
