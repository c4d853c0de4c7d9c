// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cloud Networking Resources
//!
//! Virtual networks, subnets, instances and the policy objects attached to
//! them (route tables, ACLs, security groups).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::kind::ResourceKind;

/// Virtual network (AWS VPC, Azure VNet, GCP VPC network)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualNetwork {
    /// Provider-native identifier
    pub id: String,
    pub name: String,
    pub region: String,
    pub account_id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ipv4_cidr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ipv6_cidr: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub labels: HashMap<String, String>,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_sync_time: Option<DateTime<Utc>>,
}

stored_object!(VirtualNetwork, ResourceKind::VirtualNetwork, |v| [v.id]);

/// Compute instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub id: String,
    pub name: String,
    pub region: String,
    pub zone: String,
    pub account_id: String,
    pub vpc_id: String,
    pub subnet_id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub private_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub public_ip: Option<String>,
    /// Provider lifecycle state ("running", "stopped", ...)
    pub state: String,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub labels: HashMap<String, String>,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_sync_time: Option<DateTime<Utc>>,
}

stored_object!(Instance, ResourceKind::Instance, |i| [i.id]);

/// Subnet of a virtual network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subnet {
    pub id: String,
    pub name: String,
    pub cidr_block: String,
    pub vpc_id: String,
    pub region: String,
    pub zone: String,
    pub account_id: String,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub labels: HashMap<String, String>,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_sync_time: Option<DateTime<Utc>>,
}

stored_object!(Subnet, ResourceKind::Subnet, |s| [s.id]);

/// Single route entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub destination: String,
    pub target: String,
    pub status: String,
}

/// Route table attached to a virtual network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    pub id: String,
    pub name: String,
    pub vpc_id: String,
    pub region: String,
    pub account_id: String,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub labels: HashMap<String, String>,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_sync_time: Option<DateTime<Utc>>,
}

stored_object!(RouteTable, ResourceKind::RouteTable, |r| [r.id]);

/// Whether a rule admits or drops matching traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleAction {
    Allow,
    Deny,
}

/// Traffic direction a rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleDirection {
    Inbound,
    Outbound,
}

/// Numbered ACL entry, evaluated lowest number first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclRule {
    pub number: i32,
    pub protocol: String,
    pub port_range: String,
    #[serde(default)]
    pub source_ranges: Vec<String>,
    #[serde(default)]
    pub destination_ranges: Vec<String>,
    pub action: RuleAction,
    pub direction: RuleDirection,
}

/// Network access control list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessControlList {
    pub id: String,
    pub name: String,
    pub vpc_id: String,
    pub region: String,
    pub account_id: String,
    #[serde(default)]
    pub rules: Vec<AclRule>,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub labels: HashMap<String, String>,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_sync_time: Option<DateTime<Utc>>,
}

stored_object!(AccessControlList, ResourceKind::AccessControlList, |a| [a.id]);

/// Stateful security rule (no explicit deny)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityRule {
    pub protocol: String,
    pub port_range: String,
    #[serde(default)]
    pub sources: Vec<String>,
    pub direction: RuleDirection,
}

/// Security group / network security group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityGroup {
    pub id: String,
    pub name: String,
    pub vpc_id: String,
    pub region: String,
    pub account_id: String,
    #[serde(default)]
    pub rules: Vec<SecurityRule>,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub labels: HashMap<String, String>,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_sync_time: Option<DateTime<Utc>>,
}

stored_object!(SecurityGroup, ResourceKind::SecurityGroup, |g| [g.id]);
