// Copyright (c) 2025 - Cowboy AI, Inc.
//! NATS JetStream key-value storage engine
//!
//! All thirteen collections share one KV bucket. Keys have the form
//! `<collection>.<hex(id)>`; hex keeps arbitrary provider ids (Azure resource
//! paths, ARNs) inside the KV key alphabet.
//!
//! Clearing the inventory deletes the bucket in one server-side operation and
//! recreates it empty, so a failed clear leaves every collection intact.
//!
//! # Example
//!
//! ```rust,no_run
//! use cim_infrastructure_inventory::store::jetstream::{JetStreamEngine, JetStreamEngineConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let config = JetStreamEngineConfig::new("nats://localhost:4222", "INVENTORY");
//!     let engine = JetStreamEngine::connect(config).await?;
//!     Ok(())
//! }
//! ```

use async_nats::jetstream::{self, kv};
use async_nats::ConnectOptions;
use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use std::fmt::Write as _;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::engine::{EngineResult, StorageEngine};
use crate::kind::ResourceKind;

/// Default bucket used when a location names none
pub const DEFAULT_BUCKET: &str = "INVENTORY";

/// Configuration for the JetStream engine
#[derive(Debug, Clone)]
pub struct JetStreamEngineConfig {
    /// NATS server URL
    pub url: String,
    /// KV bucket holding the inventory
    pub bucket: String,
    /// Client name
    pub name: String,
    /// Connection timeout
    pub connect_timeout: Duration,
}

impl JetStreamEngineConfig {
    pub fn new(url: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

impl Default for JetStreamEngineConfig {
    fn default() -> Self {
        Self {
            url: "nats://localhost:4222".to_string(),
            bucket: DEFAULT_BUCKET.to_string(),
            name: "cim-inventory".to_string(),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Networked engine backed by a JetStream KV bucket
pub struct JetStreamEngine {
    client: async_nats::Client,
    context: jetstream::Context,
    bucket: String,
    // Replaced wholesale when the bucket is dropped and recreated.
    store: RwLock<kv::Store>,
}

impl JetStreamEngine {
    /// Connect to NATS and open (or create) the inventory bucket
    pub async fn connect(config: JetStreamEngineConfig) -> EngineResult<Self> {
        let options = ConnectOptions::new()
            .name(&config.name)
            .connection_timeout(config.connect_timeout);

        let client = async_nats::connect_with_options(config.url.as_str(), options).await?;
        info!("Connected to NATS at {}", config.url);

        let context = jetstream::new(client.clone());
        let store = open_bucket(&context, &config.bucket).await?;

        Ok(Self {
            client,
            context,
            bucket: config.bucket,
            store: RwLock::new(store),
        })
    }

    /// Bucket name
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

async fn open_bucket(context: &jetstream::Context, bucket: &str) -> EngineResult<kv::Store> {
    let store = context
        .create_key_value(kv::Config {
            bucket: bucket.to_string(),
            history: 1,
            ..Default::default()
        })
        .await?;
    debug!(bucket, "Opened KV bucket");
    Ok(store)
}

/// KV key for a record
pub fn record_key(kind: ResourceKind, id: &str) -> String {
    let mut key = String::with_capacity(kind.collection().len() + 1 + id.len() * 2);
    key.push_str(kind.collection());
    key.push('.');
    for byte in id.as_bytes() {
        let _ = write!(key, "{:02x}", byte);
    }
    key
}

fn collection_prefix(kind: ResourceKind) -> String {
    format!("{}.", kind.collection())
}

#[async_trait]
impl StorageEngine for JetStreamEngine {
    fn name(&self) -> &'static str {
        "jetstream"
    }

    async fn put(&self, kind: ResourceKind, id: &str, value: Bytes) -> EngineResult<()> {
        let store = self.store.read().await;
        store.put(record_key(kind, id), value).await?;
        Ok(())
    }

    async fn get(&self, kind: ResourceKind, id: &str) -> EngineResult<Option<Bytes>> {
        let store = self.store.read().await;
        Ok(store.get(record_key(kind, id)).await?)
    }

    async fn list(&self, kind: ResourceKind) -> EngineResult<Vec<Bytes>> {
        let store = self.store.read().await;
        let prefix = collection_prefix(kind);

        let mut keys = store.keys().await?;
        let mut matching = Vec::new();
        while let Some(key) = keys.next().await {
            let key = key?;
            if key.starts_with(&prefix) {
                matching.push(key);
            }
        }

        let mut records = Vec::with_capacity(matching.len());
        for key in matching {
            // Deleted between the key scan and the read.
            if let Some(value) = store.get(key).await? {
                records.push(value);
            }
        }
        Ok(records)
    }

    async fn delete(&self, kind: ResourceKind, id: &str) -> EngineResult<()> {
        let store = self.store.read().await;
        store.delete(record_key(kind, id)).await?;
        Ok(())
    }

    async fn clear_all(&self) -> EngineResult<()> {
        let mut store = self.store.write().await;
        self.context.delete_key_value(&self.bucket).await?;
        *store = open_bucket(&self.context, &self.bucket).await?;
        info!(bucket = %self.bucket, "Dropped and recreated KV bucket");
        Ok(())
    }

    async fn close(&self) -> EngineResult<()> {
        self.client.flush().await?;
        Ok(())
    }
}
