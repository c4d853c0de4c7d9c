// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Collection Keys
//!
//! Record keys must be valid KV tokens for any id, and must never let two
//! (kind, id) pairs collide.

use cim_infrastructure_inventory::kind::ResourceKind;
use cim_infrastructure_inventory::model::{Pod, StoredObject};
use cim_infrastructure_inventory::store::jetstream::record_key;
use proptest::prelude::*;

fn any_kind() -> impl Strategy<Value = ResourceKind> {
    prop::sample::select(ResourceKind::ALL.to_vec())
}

proptest! {
    /// Keys only use characters a KV bucket accepts
    #[test]
    fn prop_record_key_is_kv_safe(kind in any_kind(), id in "\\PC{1,64}") {
        let key = record_key(kind, &id);
        prop_assert!(key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.'));
        let prefix = format!("{}.", kind.collection());
        prop_assert!(key.starts_with(&prefix));
    }

    /// Distinct ids never share a key within a kind
    #[test]
    fn prop_record_key_is_injective(kind in any_kind(), a in "\\PC{1,32}", b in "\\PC{1,32}") {
        prop_assume!(a != b);
        prop_assert_ne!(record_key(kind, &a), record_key(kind, &b));
    }

    /// The same id in two kinds names two records
    #[test]
    fn prop_kinds_partition_keys(a in any_kind(), b in any_kind(), id in "[a-z0-9-]{1,32}") {
        prop_assume!(a != b);
        prop_assert_ne!(record_key(a, &id), record_key(b, &id));
    }

    /// Collection names parse back to their kind
    #[test]
    fn prop_collection_name_parses_back(kind in any_kind()) {
        prop_assert_eq!(kind.collection().parse::<ResourceKind>().unwrap(), kind);
    }

    /// Pods in different clusters or namespaces never share a key
    #[test]
    fn prop_pod_keys_scoped(
        cluster in "[a-z]{1,8}",
        other_cluster in "[a-z]{1,8}",
        namespace in "[a-z]{1,8}",
        name in "[a-z0-9-]{1,16}",
    ) {
        prop_assume!(cluster != other_cluster);
        let pod = Pod {
            cluster: cluster.clone(),
            namespace: namespace.clone(),
            name: name.clone(),
            provider: "AWS".to_string(),
            ..Default::default()
        };
        let moved = Pod { cluster: other_cluster, ..pod.clone() };
        prop_assert_ne!(pod.db_id(), moved.db_id());
    }
}
