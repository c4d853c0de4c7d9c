// Copyright (c) 2025 - Cowboy AI, Inc.
//! Accounts and Sync Bookkeeping

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{composite_key, StoredObject};
use crate::kind::ResourceKind;

/// Cloud account (AWS account, Azure subscription, GCP project)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_sync_time: Option<DateTime<Utc>>,
}

// Account ids are only unique per provider.
stored_object!(Account, ResourceKind::Account, |a| [a.provider, a.id]);

/// Unit of synchronization tracked by a [`SyncRecord`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scope", content = "name", rename_all = "snake_case")]
pub enum SyncDomain {
    /// Everything discovered in one account
    Account(String),
    /// One resource kind across all accounts
    Kind(ResourceKind),
}

impl fmt::Display for SyncDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account(id) => write!(f, "account/{}", id),
            Self::Kind(kind) => write!(f, "kind/{}", kind.collection()),
        }
    }
}

/// Last successful synchronization of a domain, independent of the
/// timestamps carried by individual resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncRecord {
    pub provider: String,
    pub domain: SyncDomain,
    pub time: DateTime<Utc>,
    /// Sync pass that produced this record
    pub pass_id: Uuid,
}

impl SyncRecord {
    pub fn new(provider: impl Into<String>, domain: SyncDomain, time: DateTime<Utc>) -> Self {
        Self {
            provider: provider.into(),
            domain,
            time,
            pass_id: Uuid::now_v7(),
        }
    }

    /// Collection key for a provider/domain pair
    pub fn key_for(provider: &str, domain: &SyncDomain) -> String {
        composite_key(&Self::key_parts(provider, domain))
    }

    fn key_parts(provider: &str, domain: &SyncDomain) -> Vec<String> {
        let (scope, name) = match domain {
            SyncDomain::Account(id) => ("account", id.as_str()),
            SyncDomain::Kind(kind) => ("kind", kind.collection()),
        };
        vec![provider.to_string(), scope.to_string(), name.to_string()]
    }
}

impl StoredObject for SyncRecord {
    const KIND: ResourceKind = ResourceKind::SyncRecord;

    fn id_parts(&self) -> Vec<String> {
        Self::key_parts(&self.provider, &self.domain)
    }

    fn provider(&self) -> &str {
        &self.provider
    }

    fn sync_time(&self) -> Option<DateTime<Utc>> {
        Some(self.time)
    }

    fn set_sync_time(&mut self, at: DateTime<Utc>) {
        self.time = at;
    }
}
