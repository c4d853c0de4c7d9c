// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Store Contract
//!
//! For arbitrary ids, names and providers: a stored object reads back equal,
//! and a sequence of puts and deletes leaves the collection equal to a plain
//! map model of the same operations.

use cim_infrastructure_inventory::model::{StoredObject, VirtualNetwork};
use cim_infrastructure_inventory::store::ResourceStore;
use proptest::prelude::*;
use std::collections::BTreeMap;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
enum Op {
    Put { id: String, name: String },
    Delete { id: String },
}

fn op() -> impl Strategy<Value = Op> {
    // Small id space so puts, overwrites and deletes collide
    let id = "vnet-[0-4]";
    prop_oneof![
        (id, "[a-z]{0,12}").prop_map(|(id, name)| Op::Put { id, name }),
        id.prop_map(|id| Op::Delete { id }),
    ]
}

proptest! {
    #[test]
    fn prop_put_then_get_is_identity(
        id in "\\PC{1,48}",
        name in "\\PC{0,48}",
        provider in "[A-Za-z]{1,12}",
    ) {
        let vnet = VirtualNetwork { id: id.clone(), name, provider, ..Default::default() };

        let loaded = tokio_test::block_on(async {
            let cancel = CancellationToken::new();
            let store = ResourceStore::new();
            store.open("memory://", &cancel).await.unwrap();
            store.put(&vnet, &cancel).await.unwrap();
            store.get::<VirtualNetwork>(&vnet.db_id(), &cancel).await.unwrap()
        });

        prop_assert_eq!(loaded, vnet);
    }

    #[test]
    fn prop_collection_matches_map_model(ops in prop::collection::vec(op(), 0..40)) {
        let mut model: BTreeMap<String, String> = BTreeMap::new();
        for op in &ops {
            match op {
                Op::Put { id, name } => { model.insert(id.clone(), name.clone()); }
                Op::Delete { id } => { model.remove(id); }
            }
        }

        let stored: BTreeMap<String, String> = tokio_test::block_on(async {
            let cancel = CancellationToken::new();
            let store = ResourceStore::new();
            store.open("memory://", &cancel).await.unwrap();
            for op in &ops {
                match op {
                    Op::Put { id, name } => {
                        let vnet = VirtualNetwork {
                            id: id.clone(),
                            name: name.clone(),
                            provider: "Azure".to_string(),
                            ..Default::default()
                        };
                        store.put(&vnet, &cancel).await.unwrap();
                    }
                    Op::Delete { id } => store.delete::<VirtualNetwork>(id, &cancel).await.unwrap(),
                }
            }
            store
                .list::<VirtualNetwork>(&cancel)
                .await
                .unwrap()
                .into_iter()
                .map(|v| (v.id, v.name))
                .collect()
        });

        prop_assert_eq!(stored, model);
    }
}
