// Copyright (c) 2025 - Cowboy AI, Inc.
//! Kubernetes Resources
//!
//! Objects discovered inside managed clusters. Names are only unique inside
//! a cluster (and namespace), so collection keys are composed from those.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::kind::ResourceKind;

/// Managed Kubernetes cluster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    /// Provider-native identifier (ARN, Azure resource id, ...)
    pub id: String,
    pub name: String,
    pub region: String,
    pub account_id: String,
    pub vpc_id: String,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub labels: HashMap<String, String>,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_sync_time: Option<DateTime<Utc>>,
}

stored_object!(Cluster, ResourceKind::Cluster, |c| [c.id]);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pod {
    pub cluster: String,
    pub namespace: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ip: Option<String>,
    pub state: String,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub labels: HashMap<String, String>,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_sync_time: Option<DateTime<Utc>>,
}

stored_object!(Pod, ResourceKind::Pod, |p| [p.cluster, p.namespace, p.name]);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubernetesService {
    pub cluster: String,
    pub namespace: String,
    pub name: String,
    /// ClusterIP, NodePort, LoadBalancer, ...
    pub service_type: String,
    #[serde(default)]
    pub ingresses: Vec<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub labels: HashMap<String, String>,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_sync_time: Option<DateTime<Utc>>,
}

stored_object!(KubernetesService, ResourceKind::KubernetesService, |s| [
    s.cluster,
    s.namespace,
    s.name
]);

/// Cluster node; nodes are not namespaced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubernetesNode {
    pub cluster: String,
    pub name: String,
    #[serde(default)]
    pub addresses: Vec<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub labels: HashMap<String, String>,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_sync_time: Option<DateTime<Utc>>,
}

stored_object!(KubernetesNode, ResourceKind::KubernetesNode, |n| [n.cluster, n.name]);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    pub cluster: String,
    pub name: String,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub labels: HashMap<String, String>,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_sync_time: Option<DateTime<Utc>>,
}

stored_object!(Namespace, ResourceKind::Namespace, |n| [n.cluster, n.name]);
