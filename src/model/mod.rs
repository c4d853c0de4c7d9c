// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory Resource Model
//!
//! Provider-neutral payload shapes for every [`ResourceKind`], plus the
//! [`StoredObject`] contract the resource store persists them through.
//!
//! # Stored Object Contract
//!
//! - `db_id()` is unique within the kind's collection and never changes
//! - `provider()` names the cloud that produced the object and must be non-empty
//! - `sync_time()` records the last successful refresh from the provider
//!
//! The store never inspects payload fields beyond this contract.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::kind::ResourceKind;

/// Object persisted in one of the inventory collections
pub trait StoredObject: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection this type is stored in
    const KIND: ResourceKind;

    /// Components identifying the object within `KIND`'s collection
    fn id_parts(&self) -> Vec<String>;

    /// Identifier, unique within `KIND`'s collection
    fn db_id(&self) -> String {
        composite_key(&self.id_parts())
    }

    /// Cloud or platform that produced the object (e.g. "Azure", "AWS")
    fn provider(&self) -> &str;

    /// Last successful sync from the provider, if any
    fn sync_time(&self) -> Option<DateTime<Utc>>;

    /// Record a successful sync
    fn set_sync_time(&mut self, at: DateTime<Utc>);
}

/// Separator between the components of a composite key
pub const KEY_SEPARATOR: char = '/';

/// Join identifier parts into a collection key
///
/// Parts are not escaped. Single-part keys may contain the separator
/// (Azure resource ids, ARNs); in multi-part keys no part may, which the
/// store enforces on `put`.
pub fn composite_key<S: AsRef<str>>(parts: &[S]) -> String {
    let mut key = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            key.push(KEY_SEPARATOR);
        }
        key.push_str(part.as_ref());
    }
    key
}

macro_rules! stored_object {
    ($ty:ty, $kind:expr, |$this:ident| [$($part:expr),+ $(,)?]) => {
        impl $crate::model::StoredObject for $ty {
            const KIND: $crate::kind::ResourceKind = $kind;

            fn id_parts(&self) -> Vec<String> {
                let $this = self;
                vec![$($part.clone()),+]
            }

            fn provider(&self) -> &str {
                &self.provider
            }

            fn sync_time(&self) -> Option<chrono::DateTime<chrono::Utc>> {
                self.last_sync_time
            }

            fn set_sync_time(&mut self, at: chrono::DateTime<chrono::Utc>) {
                self.last_sync_time = Some(at);
            }
        }
    };
}

pub mod account;
pub mod kubernetes;
pub mod network;

pub use account::{Account, SyncDomain, SyncRecord};
pub use kubernetes::{Cluster, KubernetesNode, KubernetesService, Namespace, Pod};
pub use network::{
    AccessControlList, AclRule, Instance, Route, RouteTable, RuleAction, RuleDirection,
    SecurityGroup, SecurityRule, Subnet, VirtualNetwork,
};
