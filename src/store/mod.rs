// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Store
//!
//! Typed persistence facade over the closed [`ResourceKind`] catalog. One
//! generic contract (`put` / `get` / `list` / `delete`) serves every
//! [`StoredObject`] type; the engine underneath only sees bytes.
//!
//! # Architecture
//!
//! ```text
//! Provider adapter ──put──> ResourceStore ──> StorageEngine (memory | jetstream)
//!                                 ↑
//! Consumers ──get/list────────────┘
//! ```
//!
//! # Concurrency
//!
//! - Lifecycle (`open`, `close`, `drop_db`) holds the state lock exclusively;
//!   data operations share it, so a drop never interleaves with a write
//! - `put` / `delete` on the same (kind, id) serialize on a striped key lock
//! - Different ids and kinds proceed in parallel
//!
//! # Cancellation
//!
//! Writes observe the token while waiting for locks and right before the
//! engine call. Once issued, the engine write runs to completion, so a
//! cancelled write leaves either nothing or the whole record. Reads race the
//! whole operation against the token.
//!
//! # Example
//!
//! ```rust,no_run
//! use cim_infrastructure_inventory::model::VirtualNetwork;
//! use cim_infrastructure_inventory::store::ResourceStore;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cancel = CancellationToken::new();
//!     let store = ResourceStore::new();
//!     store.open("memory://", &cancel).await?;
//!
//!     let vnet = VirtualNetwork {
//!         id: "vnet-1".to_string(),
//!         provider: "Azure".to_string(),
//!         ..Default::default()
//!     };
//!     store.put(&vnet, &cancel).await?;
//!     let stored: VirtualNetwork = store.get("vnet-1", &cancel).await?;
//!     assert_eq!(stored, vnet);
//!
//!     store.close(&cancel).await?;
//!     Ok(())
//! }
//! ```

use bytes::Bytes;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::future::Future;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::kind::ResourceKind;
use crate::model::{StoredObject, KEY_SEPARATOR};

pub mod engine;
pub mod error;
pub mod jetstream;
pub mod memory;

pub use engine::{EngineError, EngineResult, StorageEngine};
pub use error::{Operation, StoreError, StoreResult};
pub use jetstream::{JetStreamEngine, JetStreamEngineConfig};
pub use memory::MemoryEngine;

/// Number of key lock stripes
const KEY_LOCK_STRIPES: usize = 64;

/// Where the store keeps its data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// In-process engine; data lives until `close`
    Memory,
    /// JetStream KV bucket on a NATS server
    JetStream { url: String, bucket: String },
}

impl FromStr for Location {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| StoreError::InvalidLocation {
            location: s.to_string(),
            reason: reason.to_string(),
        };

        if s == "memory" || s.starts_with("memory://") {
            return Ok(Self::Memory);
        }

        let rest = s
            .strip_prefix("nats://")
            .ok_or_else(|| invalid("expected memory:// or nats://host:port/bucket"))?;

        let (host, bucket) = match rest.split_once('/') {
            Some((host, bucket)) => (host, bucket.trim_end_matches('/')),
            None => (rest, ""),
        };
        if host.is_empty() {
            return Err(invalid("missing NATS host"));
        }

        let bucket = if bucket.is_empty() {
            jetstream::DEFAULT_BUCKET
        } else {
            bucket
        };
        if !bucket
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(invalid("bucket names may only contain A-Z, a-z, 0-9, '_' and '-'"));
        }

        Ok(Self::JetStream {
            url: format!("nats://{}", host),
            bucket: bucket.to_string(),
        })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => f.write_str("memory://"),
            Self::JetStream { url, bucket } => write!(f, "{}/{}", url, bucket),
        }
    }
}

enum StoreState {
    Unopened,
    Open {
        engine: Arc<dyn StorageEngine>,
        location: String,
    },
    Closed,
}

impl StoreState {
    fn engine(&self) -> StoreResult<&Arc<dyn StorageEngine>> {
        match self {
            Self::Open { engine, .. } => Ok(engine),
            Self::Unopened => Err(StoreError::NotOpen),
            Self::Closed => Err(StoreError::Closed),
        }
    }
}

/// Striped mutexes serializing writers of the same (kind, id)
struct KeyLocks {
    stripes: Vec<Mutex<()>>,
}

impl KeyLocks {
    fn new(count: usize) -> Self {
        Self {
            stripes: (0..count.max(1)).map(|_| Mutex::new(())).collect(),
        }
    }

    fn stripe(&self, kind: ResourceKind, id: &str) -> &Mutex<()> {
        let mut hasher = DefaultHasher::new();
        kind.hash(&mut hasher);
        id.hash(&mut hasher);
        &self.stripes[(hasher.finish() as usize) % self.stripes.len()]
    }
}

/// Typed, kind-partitioned persistence facade
pub struct ResourceStore {
    state: RwLock<StoreState>,
    key_locks: KeyLocks,
    connect_timeout: Duration,
}

impl ResourceStore {
    /// Create an unopened store
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState::Unopened),
            key_locks: KeyLocks::new(KEY_LOCK_STRIPES),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Timeout for networked engines opened through [`open`](Self::open)
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Open the engine named by `location`
    pub async fn open(&self, location: &str, cancel: &CancellationToken) -> StoreResult<()> {
        let parsed: Location = location.parse()?;

        let engine: Arc<dyn StorageEngine> = match &parsed {
            Location::Memory => Arc::new(MemoryEngine::new()),
            Location::JetStream { url, bucket } => {
                let config = JetStreamEngineConfig::new(url.clone(), bucket.clone())
                    .with_connect_timeout(self.connect_timeout);
                let engine = cancellable(cancel, Operation::Open, JetStreamEngine::connect(config))
                    .await?
                    .map_err(|e| StoreError::engine(Operation::Open, e))?;
                Arc::new(engine)
            }
        };

        self.attach(engine, parsed.to_string(), cancel).await
    }

    /// Open on a caller-supplied engine
    pub async fn open_with_engine(
        &self,
        engine: Arc<dyn StorageEngine>,
        cancel: &CancellationToken,
    ) -> StoreResult<()> {
        let location = format!("{}://", engine.name());
        self.attach(engine, location, cancel).await
    }

    async fn attach(
        &self,
        engine: Arc<dyn StorageEngine>,
        location: String,
        cancel: &CancellationToken,
    ) -> StoreResult<()> {
        let mut state = cancellable(cancel, Operation::Open, self.state.write()).await?;
        if let StoreState::Open { location, .. } = &*state {
            return Err(StoreError::AlreadyOpen(location.clone()));
        }

        info!(engine = engine.name(), %location, "Resource store opened");
        *state = StoreState::Open { engine, location };
        Ok(())
    }

    /// Release the engine; later calls fail with [`StoreError::Closed`]
    ///
    /// A cancelled or failed close leaves the store open.
    pub async fn close(&self, cancel: &CancellationToken) -> StoreResult<()> {
        let mut state = cancellable(cancel, Operation::Close, self.state.write()).await?;
        let engine = match &*state {
            StoreState::Open { engine, .. } => Arc::clone(engine),
            StoreState::Closed => return Ok(()),
            StoreState::Unopened => return Err(StoreError::NotOpen),
        };

        cancellable(cancel, Operation::Close, engine.close())
            .await?
            .map_err(|e| StoreError::engine(Operation::Close, e))?;

        if let StoreState::Open { location, .. } = std::mem::replace(&mut *state, StoreState::Closed) {
            info!(%location, "Resource store closed");
        }
        Ok(())
    }

    /// Whether the store currently has an open engine
    pub async fn is_open(&self) -> bool {
        matches!(&*self.state.read().await, StoreState::Open { .. })
    }

    /// Wipe every collection. Either all are cleared or none are.
    pub async fn drop_db(&self, cancel: &CancellationToken) -> StoreResult<()> {
        let state = cancellable(cancel, Operation::DropDb, self.state.write()).await?;
        let engine = state.engine()?;
        if cancel.is_cancelled() {
            return Err(StoreError::Cancelled(Operation::DropDb));
        }

        engine
            .clear_all()
            .await
            .map_err(|e| StoreError::engine(Operation::DropDb, e))?;
        warn!(engine = engine.name(), "Dropped all inventory collections");
        Ok(())
    }

    /// Insert or overwrite `object` in its kind's collection
    pub async fn put<T: StoredObject>(&self, object: &T, cancel: &CancellationToken) -> StoreResult<()> {
        let id = object.db_id();
        validate(object, &id)?;

        let payload = serde_json::to_vec(object).map_err(|e| StoreError::Serialization {
            kind: T::KIND,
            id: id.clone(),
            message: e.to_string(),
        })?;

        let state = self.shared_state(cancel, Operation::Put).await?;
        let engine = state.engine()?;
        let _key = self.lock_key(T::KIND, &id, cancel, Operation::Put).await?;

        // Provider is fixed when the object is first stored
        let existing = cancellable(cancel, Operation::Put, engine.get(T::KIND, &id))
            .await?
            .map_err(|e| StoreError::engine_at(Operation::Put, T::KIND, Some(&id), e))?;
        if let Some(raw) = existing {
            let current: T = decode(T::KIND, &id, &raw)?;
            if current.provider() != object.provider() {
                return Err(StoreError::InvalidObject {
                    kind: T::KIND,
                    id,
                    reason: format!(
                        "provider is '{}' and cannot change to '{}'",
                        current.provider(),
                        object.provider()
                    ),
                });
            }
        }

        if cancel.is_cancelled() {
            return Err(StoreError::Cancelled(Operation::Put));
        }

        engine
            .put(T::KIND, &id, Bytes::from(payload))
            .await
            .map_err(|e| StoreError::engine_at(Operation::Put, T::KIND, Some(&id), e))?;

        debug!(kind = %T::KIND, id = %id, provider = object.provider(), "Stored object");
        Ok(())
    }

    /// Exact lookup by id
    pub async fn get<T: StoredObject>(&self, id: &str, cancel: &CancellationToken) -> StoreResult<T> {
        let state = self.shared_state(cancel, Operation::Get).await?;
        let engine = state.engine()?;
        // No object can be stored under an empty id
        if id.is_empty() {
            return Err(StoreError::NotFound {
                kind: T::KIND,
                id: String::new(),
            });
        }

        let raw = cancellable(cancel, Operation::Get, engine.get(T::KIND, id))
            .await?
            .map_err(|e| StoreError::engine_at(Operation::Get, T::KIND, Some(id), e))?
            .ok_or_else(|| StoreError::NotFound {
                kind: T::KIND,
                id: id.to_string(),
            })?;

        decode(T::KIND, id, &raw)
    }

    /// Snapshot of every object of kind `T`, in no particular order
    pub async fn list<T: StoredObject>(&self, cancel: &CancellationToken) -> StoreResult<Vec<T>> {
        let records = self.list_raw(T::KIND, cancel).await?;
        records
            .iter()
            .map(|raw| decode(T::KIND, "<list>", raw))
            .collect()
    }

    /// Untyped listing for callers that only know the kind at runtime
    pub async fn list_values(
        &self,
        kind: ResourceKind,
        cancel: &CancellationToken,
    ) -> StoreResult<Vec<serde_json::Value>> {
        let records = self.list_raw(kind, cancel).await?;
        records
            .iter()
            .map(|raw| decode(kind, "<list>", raw))
            .collect()
    }

    async fn list_raw(&self, kind: ResourceKind, cancel: &CancellationToken) -> StoreResult<Vec<Bytes>> {
        let state = self.shared_state(cancel, Operation::List).await?;
        let engine = state.engine()?;

        cancellable(cancel, Operation::List, engine.list(kind))
            .await?
            .map_err(|e| StoreError::engine_at(Operation::List, kind, None, e))
    }

    /// Remove by id; removing a missing id succeeds
    pub async fn delete<T: StoredObject>(&self, id: &str, cancel: &CancellationToken) -> StoreResult<()> {
        let state = self.shared_state(cancel, Operation::Delete).await?;
        let engine = state.engine()?;
        if id.is_empty() {
            return Ok(());
        }
        let _key = self.lock_key(T::KIND, id, cancel, Operation::Delete).await?;
        if cancel.is_cancelled() {
            return Err(StoreError::Cancelled(Operation::Delete));
        }

        engine
            .delete(T::KIND, id)
            .await
            .map_err(|e| StoreError::engine_at(Operation::Delete, T::KIND, Some(id), e))?;

        debug!(kind = %T::KIND, id, "Deleted object");
        Ok(())
    }

    async fn shared_state(
        &self,
        cancel: &CancellationToken,
        operation: Operation,
    ) -> StoreResult<RwLockReadGuard<'_, StoreState>> {
        cancellable(cancel, operation, self.state.read()).await
    }

    async fn lock_key(
        &self,
        kind: ResourceKind,
        id: &str,
        cancel: &CancellationToken,
        operation: Operation,
    ) -> StoreResult<MutexGuard<'_, ()>> {
        cancellable(cancel, operation, self.key_locks.stripe(kind, id).lock()).await
    }
}

impl Default for ResourceStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Race `future` against the token; a cancelled token wins ties
async fn cancellable<F: Future>(
    cancel: &CancellationToken,
    operation: Operation,
    future: F,
) -> StoreResult<F::Output> {
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(StoreError::Cancelled(operation)),
        output = future => Ok(output),
    }
}

fn validate<T: StoredObject>(object: &T, id: &str) -> StoreResult<()> {
    let invalid = |reason: &str| StoreError::InvalidObject {
        kind: T::KIND,
        id: id.to_string(),
        reason: reason.to_string(),
    };

    let parts = object.id_parts();
    if id.is_empty() || parts.iter().any(String::is_empty) {
        return Err(invalid("id is empty"));
    }
    if parts.len() > 1 && parts.iter().any(|part| part.contains(KEY_SEPARATOR)) {
        return Err(invalid("id component contains the key separator"));
    }
    if object.provider().trim().is_empty() {
        return Err(invalid("provider is empty"));
    }
    Ok(())
}

fn decode<T: serde::de::DeserializeOwned>(kind: ResourceKind, id: &str, raw: &[u8]) -> StoreResult<T> {
    serde_json::from_slice(raw).map_err(|e| StoreError::Serialization {
        kind,
        id: id.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Account, Instance, KubernetesNode, Namespace, Pod, Subnet, VirtualNetwork};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn vnet(id: &str) -> VirtualNetwork {
        VirtualNetwork {
            id: id.to_string(),
            name: format!("{}-name", id),
            provider: "Azure".to_string(),
            ..Default::default()
        }
    }

    async fn open_store() -> (ResourceStore, CancellationToken) {
        let cancel = CancellationToken::new();
        let store = ResourceStore::new();
        store.open("memory://", &cancel).await.unwrap();
        (store, cancel)
    }

    #[test_case("memory://", Location::Memory)]
    #[test_case("memory", Location::Memory)]
    #[test_case("nats://localhost:4222", Location::JetStream { url: "nats://localhost:4222".into(), bucket: "INVENTORY".into() })]
    #[test_case("nats://10.0.20.3:4222/infra_inv/", Location::JetStream { url: "nats://10.0.20.3:4222".into(), bucket: "infra_inv".into() })]
    fn test_location_parsing(input: &str, expected: Location) {
        assert_eq!(input.parse::<Location>().unwrap(), expected);
    }

    #[test_case("/var/lib/inventory.db")]
    #[test_case("nats:///bucket")]
    #[test_case("nats://localhost:4222/bad.bucket")]
    fn test_invalid_location(input: &str) {
        assert!(matches!(
            input.parse::<Location>(),
            Err(StoreError::InvalidLocation { .. })
        ));
    }

    #[tokio::test]
    async fn test_operations_before_open_fail() {
        let cancel = CancellationToken::new();
        let store = ResourceStore::new();

        let err = store.get::<VirtualNetwork>("vnet-1", &cancel).await.unwrap_err();
        assert!(matches!(err, StoreError::NotOpen));
        assert!(matches!(store.close(&cancel).await, Err(StoreError::NotOpen)));
    }

    #[tokio::test]
    async fn test_double_open_rejected() {
        let (store, cancel) = open_store().await;
        let err = store.open("memory://", &cancel).await.unwrap_err();
        assert!(matches!(err, StoreError::AlreadyOpen(_)));
    }

    #[tokio::test]
    async fn test_closed_store_rejects_calls() {
        let (store, cancel) = open_store().await;
        store.put(&vnet("vnet-1"), &cancel).await.unwrap();
        store.close(&cancel).await.unwrap();

        assert!(matches!(
            store.put(&vnet("vnet-2"), &cancel).await,
            Err(StoreError::Closed)
        ));
        assert!(matches!(
            store.list::<VirtualNetwork>(&cancel).await,
            Err(StoreError::Closed)
        ));
        assert!(matches!(store.drop_db(&cancel).await, Err(StoreError::Closed)));
        // closing twice is harmless
        store.close(&cancel).await.unwrap();
        assert!(!store.is_open().await);
    }

    #[tokio::test]
    async fn test_reopen_after_close() {
        let (store, cancel) = open_store().await;
        store.close(&cancel).await.unwrap();
        store.open("memory://", &cancel).await.unwrap();
        assert!(store.list::<Subnet>(&cancel).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_provider_rejected() {
        let (store, cancel) = open_store().await;
        let mut object = vnet("vnet-1");
        object.provider = " ".to_string();

        let err = store.put(&object, &cancel).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidObject { .. }));
        assert!(store.get::<VirtualNetwork>("vnet-1", &cancel).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_provider_change_rejected() {
        let (store, cancel) = open_store().await;
        store.put(&vnet("vnet-1"), &cancel).await.unwrap();

        let mut moved = vnet("vnet-1");
        moved.provider = "AWS".to_string();
        let err = store.put(&moved, &cancel).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidObject { .. }));

        let stored: VirtualNetwork = store.get("vnet-1", &cancel).await.unwrap();
        assert_eq!(stored.provider, "Azure");
    }

    #[tokio::test]
    async fn test_same_provider_overwrite_allowed() {
        let (store, cancel) = open_store().await;
        store.put(&vnet("vnet-1"), &cancel).await.unwrap();

        let mut renamed = vnet("vnet-1");
        renamed.name = "renamed".to_string();
        store.put(&renamed, &cancel).await.unwrap();

        let stored: VirtualNetwork = store.get("vnet-1", &cancel).await.unwrap();
        assert_eq!(stored, renamed);
    }

    #[tokio::test]
    async fn test_empty_id_rejected() {
        let (store, cancel) = open_store().await;
        let err = store.put(&vnet(""), &cancel).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidObject { .. }));
    }

    #[tokio::test]
    async fn test_empty_id_components_rejected() {
        let (store, cancel) = open_store().await;

        let pod = Pod {
            provider: "AWS".to_string(),
            ..Default::default()
        };
        let namespace = Namespace {
            cluster: "c1".to_string(),
            provider: "AWS".to_string(),
            ..Default::default()
        };
        let node = KubernetesNode {
            name: "node-0".to_string(),
            provider: "AWS".to_string(),
            ..Default::default()
        };
        let account = Account {
            provider: "Azure".to_string(),
            ..Default::default()
        };

        for err in [
            store.put(&pod, &cancel).await.unwrap_err(),
            store.put(&namespace, &cancel).await.unwrap_err(),
            store.put(&node, &cancel).await.unwrap_err(),
            store.put(&account, &cancel).await.unwrap_err(),
        ] {
            assert!(matches!(err, StoreError::InvalidObject { .. }), "{}", err);
        }
        for kind in [ResourceKind::Pod, ResourceKind::Namespace, ResourceKind::KubernetesNode, ResourceKind::Account] {
            assert!(store.list_values(kind, &cancel).await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_separator_inside_composite_part_rejected() {
        let (store, cancel) = open_store().await;
        let pod = Pod {
            cluster: "c1".to_string(),
            namespace: "default/web".to_string(),
            name: "0".to_string(),
            provider: "AWS".to_string(),
            ..Default::default()
        };

        let err = store.put(&pod, &cancel).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidObject { .. }));

        // Single-part ids keep provider-native paths intact
        store.put(&vnet("/subscriptions/s1/virtualNetworks/v1"), &cancel).await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_id_lookup_and_delete() {
        let (store, cancel) = open_store().await;

        let err = store.get::<VirtualNetwork>("", &cancel).await.unwrap_err();
        assert!(err.is_not_found());
        store.delete::<VirtualNetwork>("", &cancel).await.unwrap();
    }

    #[tokio::test]
    async fn test_cancelled_close_leaves_store_open() {
        let (store, cancel) = open_store().await;
        store.put(&vnet("vnet-1"), &cancel).await.unwrap();

        let cancelled = CancellationToken::new();
        cancelled.cancel();
        let err = store.close(&cancelled).await.unwrap_err();
        assert!(matches!(err, StoreError::Cancelled(Operation::Close)));

        assert!(store.is_open().await);
        let stored: VirtualNetwork = store.get("vnet-1", &cancel).await.unwrap();
        assert_eq!(stored.id, "vnet-1");
        store.close(&cancel).await.unwrap();
    }

    #[tokio::test]
    async fn test_ids_are_scoped_per_kind() {
        let (store, cancel) = open_store().await;
        store.put(&vnet("shared"), &cancel).await.unwrap();
        let instance = Instance {
            id: "shared".to_string(),
            provider: "AWS".to_string(),
            ..Default::default()
        };
        store.put(&instance, &cancel).await.unwrap();

        store.delete::<VirtualNetwork>("shared", &cancel).await.unwrap();

        let still_there: Instance = store.get("shared", &cancel).await.unwrap();
        assert_eq!(still_there, instance);
    }

    #[tokio::test]
    async fn test_cancelled_put_writes_nothing() {
        let (store, cancel) = open_store().await;
        let cancelled = CancellationToken::new();
        cancelled.cancel();

        let err = store.put(&vnet("vnet-1"), &cancelled).await.unwrap_err();
        assert!(err.is_cancelled());
        assert!(store.get::<VirtualNetwork>("vnet-1", &cancel).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_cancelled_read_reports_cancellation() {
        let (store, _) = open_store().await;
        let cancelled = CancellationToken::new();
        cancelled.cancel();

        let err = store.list::<VirtualNetwork>(&cancelled).await.unwrap_err();
        assert!(matches!(err, StoreError::Cancelled(Operation::List)));
    }

    #[tokio::test]
    async fn test_list_values_is_untyped_view() {
        let (store, cancel) = open_store().await;
        store.put(&vnet("vnet-1"), &cancel).await.unwrap();

        let values = store
            .list_values(ResourceKind::VirtualNetwork, &cancel)
            .await
            .unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0]["id"], "vnet-1");
        assert_eq!(values[0]["provider"], "Azure");
    }
}
