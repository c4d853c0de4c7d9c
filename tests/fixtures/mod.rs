// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-infrastructure-inventory
//!
//! Deterministic inventory objects, one builder per resource kind. Timestamps
//! are fixed constants so stored and reloaded objects compare equal.
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use cim_infrastructure_inventory::model::*;

pub const PROVIDER: &str = "Azure";
pub const ACCOUNT: &str = "00000000-0000-0000-0000-0000000000a1";

// Fixed test timestamp (2026-01-19T12:00:00Z)
pub const FIXED_TIMESTAMP: &str = "2026-01-19T12:00:00Z";

pub fn fixed_timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(FIXED_TIMESTAMP)
        .expect("Invalid timestamp in test fixture")
        .with_timezone(&Utc)
}

fn labels() -> HashMap<String, String> {
    HashMap::from([
        ("env".to_string(), "prod".to_string()),
        ("team".to_string(), "network".to_string()),
    ])
}

pub fn vnet(id: &str) -> VirtualNetwork {
    VirtualNetwork {
        id: id.to_string(),
        name: format!("{}-name", id),
        region: "westeurope".to_string(),
        account_id: ACCOUNT.to_string(),
        ipv4_cidr: Some("10.0.0.0/16".to_string()),
        ipv6_cidr: None,
        labels: labels(),
        provider: PROVIDER.to_string(),
        last_sync_time: Some(fixed_timestamp()),
    }
}

pub fn instance(id: &str) -> Instance {
    Instance {
        id: id.to_string(),
        name: format!("{}-vm", id),
        region: "westeurope".to_string(),
        zone: "1".to_string(),
        account_id: ACCOUNT.to_string(),
        vpc_id: "vnet-1".to_string(),
        subnet_id: "subnet-1".to_string(),
        private_ip: Some("10.0.1.4".to_string()),
        public_ip: None,
        state: "running".to_string(),
        labels: labels(),
        provider: PROVIDER.to_string(),
        last_sync_time: Some(fixed_timestamp()),
    }
}

pub fn subnet(id: &str) -> Subnet {
    Subnet {
        id: id.to_string(),
        name: format!("{}-subnet", id),
        cidr_block: "10.0.1.0/24".to_string(),
        vpc_id: "vnet-1".to_string(),
        region: "westeurope".to_string(),
        zone: "1".to_string(),
        account_id: ACCOUNT.to_string(),
        labels: HashMap::new(),
        provider: PROVIDER.to_string(),
        last_sync_time: Some(fixed_timestamp()),
    }
}

pub fn cluster(id: &str) -> Cluster {
    Cluster {
        id: id.to_string(),
        name: "aks-prod".to_string(),
        region: "westeurope".to_string(),
        account_id: ACCOUNT.to_string(),
        vpc_id: "vnet-1".to_string(),
        labels: labels(),
        provider: PROVIDER.to_string(),
        last_sync_time: None,
    }
}

pub fn pod(cluster: &str, namespace: &str, name: &str) -> Pod {
    Pod {
        cluster: cluster.to_string(),
        namespace: namespace.to_string(),
        name: name.to_string(),
        ip: Some("10.244.0.12".to_string()),
        state: "Running".to_string(),
        labels: HashMap::from([("app".to_string(), "web".to_string())]),
        provider: PROVIDER.to_string(),
        last_sync_time: Some(fixed_timestamp()),
    }
}

pub fn kubernetes_service(cluster: &str, namespace: &str, name: &str) -> KubernetesService {
    KubernetesService {
        cluster: cluster.to_string(),
        namespace: namespace.to_string(),
        name: name.to_string(),
        service_type: "LoadBalancer".to_string(),
        ingresses: vec!["20.50.1.7".to_string()],
        labels: HashMap::new(),
        provider: PROVIDER.to_string(),
        last_sync_time: Some(fixed_timestamp()),
    }
}

pub fn kubernetes_node(cluster: &str, name: &str) -> KubernetesNode {
    KubernetesNode {
        cluster: cluster.to_string(),
        name: name.to_string(),
        addresses: vec!["10.0.2.4".to_string()],
        labels: HashMap::new(),
        provider: PROVIDER.to_string(),
        last_sync_time: Some(fixed_timestamp()),
    }
}

pub fn namespace(cluster: &str, name: &str) -> Namespace {
    Namespace {
        cluster: cluster.to_string(),
        name: name.to_string(),
        labels: HashMap::new(),
        provider: PROVIDER.to_string(),
        last_sync_time: Some(fixed_timestamp()),
    }
}

pub fn account(id: &str) -> Account {
    Account {
        id: id.to_string(),
        name: "Production".to_string(),
        provider: PROVIDER.to_string(),
        last_sync_time: Some(fixed_timestamp()),
    }
}

pub fn route_table(id: &str) -> RouteTable {
    RouteTable {
        id: id.to_string(),
        name: "rt-main".to_string(),
        vpc_id: "vnet-1".to_string(),
        region: "westeurope".to_string(),
        account_id: ACCOUNT.to_string(),
        routes: vec![Route {
            destination: "0.0.0.0/0".to_string(),
            target: "Internet".to_string(),
            status: "active".to_string(),
        }],
        labels: HashMap::new(),
        provider: PROVIDER.to_string(),
        last_sync_time: Some(fixed_timestamp()),
    }
}

pub fn acl(id: &str) -> AccessControlList {
    AccessControlList {
        id: id.to_string(),
        name: "acl-main".to_string(),
        vpc_id: "vnet-1".to_string(),
        region: "westeurope".to_string(),
        account_id: ACCOUNT.to_string(),
        rules: vec![AclRule {
            number: 100,
            protocol: "tcp".to_string(),
            port_range: "443".to_string(),
            source_ranges: vec!["0.0.0.0/0".to_string()],
            destination_ranges: vec!["10.0.0.0/16".to_string()],
            action: RuleAction::Allow,
            direction: RuleDirection::Inbound,
        }],
        labels: HashMap::new(),
        provider: PROVIDER.to_string(),
        last_sync_time: Some(fixed_timestamp()),
    }
}

pub fn security_group(id: &str) -> SecurityGroup {
    SecurityGroup {
        id: id.to_string(),
        name: "nsg-web".to_string(),
        vpc_id: "vnet-1".to_string(),
        region: "westeurope".to_string(),
        account_id: ACCOUNT.to_string(),
        rules: vec![SecurityRule {
            protocol: "tcp".to_string(),
            port_range: "22".to_string(),
            sources: vec!["10.10.0.0/16".to_string()],
            direction: RuleDirection::Inbound,
        }],
        labels: labels(),
        provider: PROVIDER.to_string(),
        last_sync_time: Some(fixed_timestamp()),
    }
}

pub fn sync_record(account: &str) -> SyncRecord {
    SyncRecord::new(PROVIDER, SyncDomain::Account(account.to_string()), fixed_timestamp())
}
