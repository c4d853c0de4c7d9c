// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Kind Catalog
//!
//! The closed set of resource kinds the inventory persists. Every kind owns
//! exactly one logical collection; identifiers are unique only within that
//! collection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::store::StoreError;

/// Kind of inventoried resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    // Cloud networking
    /// VPC / VNet
    VirtualNetwork,
    /// Compute instance
    Instance,
    /// Subnet inside a virtual network
    Subnet,
    /// Route table
    RouteTable,
    /// Network access control list
    AccessControlList,
    /// Security group / NSG
    SecurityGroup,

    // Kubernetes
    /// Kubernetes cluster
    Cluster,
    /// Pod
    Pod,
    /// Kubernetes service
    KubernetesService,
    /// Kubernetes node
    KubernetesNode,
    /// Kubernetes namespace
    Namespace,

    // Bookkeeping
    /// Cloud account / subscription
    Account,
    /// Last successful sync per domain
    SyncRecord,
}

impl ResourceKind {
    /// Every kind, in catalog order
    pub const ALL: [ResourceKind; 13] = [
        Self::VirtualNetwork,
        Self::Instance,
        Self::Subnet,
        Self::Cluster,
        Self::Pod,
        Self::KubernetesService,
        Self::KubernetesNode,
        Self::Namespace,
        Self::Account,
        Self::RouteTable,
        Self::AccessControlList,
        Self::SecurityGroup,
        Self::SyncRecord,
    ];

    /// Name of the collection holding this kind
    pub fn collection(&self) -> &'static str {
        match self {
            Self::VirtualNetwork => "vpcs",
            Self::Instance => "instances",
            Self::Subnet => "subnets",
            Self::Cluster => "clusters",
            Self::Pod => "pods",
            Self::KubernetesService => "kubernetes_services",
            Self::KubernetesNode => "kubernetes_nodes",
            Self::Namespace => "namespaces",
            Self::Account => "accounts",
            Self::RouteTable => "route_tables",
            Self::AccessControlList => "acls",
            Self::SecurityGroup => "security_groups",
            Self::SyncRecord => "sync_time",
        }
    }

    /// Get human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::VirtualNetwork => "Virtual Network",
            Self::Instance => "Instance",
            Self::Subnet => "Subnet",
            Self::Cluster => "Cluster",
            Self::Pod => "Pod",
            Self::KubernetesService => "Kubernetes Service",
            Self::KubernetesNode => "Kubernetes Node",
            Self::Namespace => "Namespace",
            Self::Account => "Account",
            Self::RouteTable => "Route Table",
            Self::AccessControlList => "Access Control List",
            Self::SecurityGroup => "Security Group",
            Self::SyncRecord => "Sync Record",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

impl FromStr for ResourceKind {
    type Err = StoreError;

    /// Accepts the collection name or a few common aliases; anything else
    /// is outside the catalog and rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_lowercase().as_str() {
            "vpcs" | "vpc" | "vnet" | "vnets" | "virtual_network" => Self::VirtualNetwork,
            "instances" | "instance" | "vm" => Self::Instance,
            "subnets" | "subnet" => Self::Subnet,
            "clusters" | "cluster" => Self::Cluster,
            "pods" | "pod" => Self::Pod,
            "kubernetes_services" | "kubernetes_service" | "k8s_service" => {
                Self::KubernetesService
            }
            "kubernetes_nodes" | "kubernetes_node" | "k8s_node" => Self::KubernetesNode,
            "namespaces" | "namespace" => Self::Namespace,
            "accounts" | "account" => Self::Account,
            "route_tables" | "route_table" => Self::RouteTable,
            "acls" | "acl" | "access_control_list" => Self::AccessControlList,
            "security_groups" | "security_group" | "nsg" => Self::SecurityGroup,
            "sync_time" | "sync_times" | "sync_record" => Self::SyncRecord,
            _ => return Err(StoreError::UnknownKind(s.to_string())),
        };
        Ok(kind)
    }
}
