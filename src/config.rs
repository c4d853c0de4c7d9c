// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory configuration

use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::errors::{InventoryError, InventoryResult};
use crate::registry::{
    parse_account_list, AccountClientRegistry, AccountId, CloudProvider, CredentialSource,
    StaticAccounts,
};
use crate::store::ResourceStore;

/// Settings shared by the store and the client registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Store location (`memory://` or `nats://host:port/bucket`)
    pub store_location: String,
    /// Provider the registry is built for
    pub provider: String,
    /// Accounts to provision
    pub accounts: Vec<AccountId>,
    /// Connection timeout for networked engines
    pub connect_timeout: Duration,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            store_location: "memory://".to_string(),
            provider: "Azure".to_string(),
            accounts: Vec::new(),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl InventoryConfig {
    /// Load configuration from environment variables
    ///
    /// - `INVENTORY_STORE`
    /// - `INVENTORY_PROVIDER`
    /// - `INVENTORY_ACCOUNTS` (comma separated)
    /// - `NATS_CONNECT_TIMEOUT_SECS`
    pub fn from_env() -> InventoryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> InventoryResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let connect_timeout = match lookup("NATS_CONNECT_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    InventoryError::Configuration(format!(
                        "NATS_CONNECT_TIMEOUT_SECS must be a whole number of seconds, got '{}': {}",
                        raw, e
                    ))
                })?;
                Duration::from_secs(secs)
            }
            None => defaults.connect_timeout,
        };

        let provider = lookup("INVENTORY_PROVIDER").unwrap_or(defaults.provider);
        if provider.trim().is_empty() {
            return Err(InventoryError::Configuration(
                "INVENTORY_PROVIDER must not be empty".to_string(),
            ));
        }

        Ok(Self {
            store_location: lookup("INVENTORY_STORE").unwrap_or(defaults.store_location),
            provider,
            accounts: lookup("INVENTORY_ACCOUNTS")
                .map(|raw| parse_account_list(&raw))
                .unwrap_or_default(),
            connect_timeout,
        })
    }

    /// Unopened store honouring this configuration
    pub fn store(&self) -> ResourceStore {
        ResourceStore::new().with_connect_timeout(self.connect_timeout)
    }

    /// Store opened at `store_location`
    pub async fn open_store(&self, cancel: &CancellationToken) -> InventoryResult<ResourceStore> {
        let store = self.store();
        store.open(&self.store_location, cancel).await?;
        Ok(store)
    }

    /// Configured accounts, provided the configuration names provider `P`
    pub fn account_source<P: CloudProvider>(&self) -> InventoryResult<StaticAccounts> {
        if !self.provider.eq_ignore_ascii_case(P::NAME) {
            return Err(InventoryError::Configuration(format!(
                "INVENTORY_PROVIDER is '{}' but the registry is built for '{}'",
                self.provider,
                P::NAME
            )));
        }
        Ok(StaticAccounts(self.accounts.clone()))
    }

    /// Client registry over the configured accounts
    pub async fn connect_registry<P, C>(
        &self,
        provider: &P,
        credentials: &C,
        cancel: &CancellationToken,
    ) -> InventoryResult<AccountClientRegistry<P>>
    where
        P: CloudProvider,
        C: CredentialSource<Credential = P::Credential>,
    {
        let accounts = self.account_source::<P>()?;
        info!(provider = P::NAME, accounts = accounts.0.len(), "Building client registry");
        let registry = AccountClientRegistry::connect(provider, credentials, &accounts, cancel).await?;
        Ok(registry)
    }
}
