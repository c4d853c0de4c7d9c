// Copyright (c) 2025 - Cowboy AI, Inc.
//! Sync-time bookkeeping
//!
//! Two clocks are tracked independently:
//!
//! - every stored object carries the time it was last refreshed
//! - every [`SyncDomain`] (an account, or a whole kind) has a [`SyncRecord`]
//!   marking the last *complete* pass over it
//!
//! A discovery pass refreshes objects as it goes and marks the domain synced
//! only once the pass finished.

use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::model::{StoredObject, SyncDomain, SyncRecord};
use crate::store::{ResourceStore, StoreResult};

impl ResourceStore {
    /// Stamp `object` with `at` and store it
    pub async fn refresh<T: StoredObject>(
        &self,
        mut object: T,
        at: DateTime<Utc>,
        cancel: &CancellationToken,
    ) -> StoreResult<T> {
        object.set_sync_time(at);
        self.put(&object, cancel).await?;
        Ok(object)
    }

    /// Record a completed sync of `domain` for `provider`
    pub async fn mark_synced(
        &self,
        provider: &str,
        domain: SyncDomain,
        at: DateTime<Utc>,
        cancel: &CancellationToken,
    ) -> StoreResult<SyncRecord> {
        let record = SyncRecord::new(provider, domain, at);
        self.put(&record, cancel).await?;
        info!(provider, domain = %record.domain, time = %at, "Sync recorded");
        Ok(record)
    }

    /// Last completed sync of `domain`; `NotFound` if it never synced
    pub async fn last_synced(
        &self,
        provider: &str,
        domain: &SyncDomain,
        cancel: &CancellationToken,
    ) -> StoreResult<SyncRecord> {
        self.get(&SyncRecord::key_for(provider, domain), cancel).await
    }
}
