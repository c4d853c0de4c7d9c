// Copyright (c) 2025 - Cowboy AI, Inc.

//! Azure Resource Manager Provider
//!
//! Builds, per subscription, the handle bundle a discovery adapter needs:
//! virtual networks, VNet peerings, network security groups and tags.
//! Handles are thin ARM REST clients sharing one HTTP client and one bearer
//! token source.
//!
//! # Example
//!
//! ```rust,no_run
//! use cim_infrastructure_inventory::providers::azure::{AzureProvider, EnvironmentCredential};
//! use cim_infrastructure_inventory::registry::{AccountClientRegistry, EnvAccounts};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cancel = CancellationToken::new();
//!     let provider = AzureProvider::new()?;
//!     let registry = AccountClientRegistry::connect(
//!         &provider,
//!         &EnvironmentCredential::default(),
//!         &EnvAccounts::new("AZURE_SUBSCRIPTION_IDS"),
//!         &cancel,
//!     )
//!     .await?;
//!
//!     for account in registry.accounts() {
//!         let vnets = registry.bundle(account.as_str())?.vnet.list_raw(&cancel).await?;
//!         println!("{}: {} vnets", account, vnets.len());
//!     }
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::registry::{
    checked_handle, AccountId, ApiHandle, ClientBundle, CloudProvider, CredentialSource,
    RegistryError, SourceError,
};

/// Provider identity written on stored objects
pub const PROVIDER_NAME: &str = "Azure";

/// Public-cloud ARM endpoint
pub const ARM_ENDPOINT: &str = "https://management.azure.com";

const NETWORK_API_VERSION: &str = "2023-09-01";
const RESOURCES_API_VERSION: &str = "2021-04-01";

/// ARM handle errors
#[derive(Debug, Error)]
pub enum ArmError {
    #[error("Invalid subscription id '{0}': expected a GUID")]
    InvalidSubscription(String),

    #[error("Failed to obtain ARM token: {0}")]
    Credential(#[source] SourceError),

    #[error("ARM request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ARM request cancelled")]
    Cancelled,
}

/// Bearer token source for ARM requests
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn token(&self) -> Result<String, SourceError>;
}

/// Shared credential handed to every handle
pub type AzureCredential = Arc<dyn TokenSource>;

/// Fixed bearer token
pub struct StaticToken(pub String);

#[async_trait]
impl TokenSource for StaticToken {
    async fn token(&self) -> Result<String, SourceError> {
        Ok(self.0.clone())
    }
}

/// Credential source reading a pre-issued token from the environment
#[derive(Debug, Clone)]
pub struct EnvironmentCredential {
    pub var: String,
}

impl Default for EnvironmentCredential {
    fn default() -> Self {
        Self {
            var: "AZURE_ACCESS_TOKEN".to_string(),
        }
    }
}

#[async_trait]
impl CredentialSource for EnvironmentCredential {
    type Credential = AzureCredential;

    async fn credential(&self) -> Result<AzureCredential, SourceError> {
        let token = std::env::var(&self.var)
            .map_err(|e| SourceError::from(format!("{}: {}", self.var, e)))?;
        if token.trim().is_empty() {
            return Err(format!("{} is empty", self.var).into());
        }
        Ok(Arc::new(StaticToken(token)))
    }
}

#[derive(Debug, Deserialize)]
struct ArmPage {
    #[serde(default)]
    value: Vec<serde_json::Value>,
    #[serde(rename = "nextLink")]
    next_link: Option<String>,
}

/// ARM client for one resource collection in one subscription
pub struct ArmHandle {
    subscription: String,
    /// Collection path below the scope (e.g. `providers/Microsoft.Network/virtualNetworks`)
    path: &'static str,
    api_version: &'static str,
    endpoint: String,
    http: Client,
    credential: AzureCredential,
}

impl ArmHandle {
    pub fn new(
        provider: &AzureProvider,
        subscription: &AccountId,
        credential: &AzureCredential,
        path: &'static str,
        api_version: &'static str,
    ) -> Result<Self, ArmError> {
        let parsed = Uuid::parse_str(subscription.as_str())
            .map_err(|_| ArmError::InvalidSubscription(subscription.to_string()))?;

        Ok(Self {
            subscription: parsed.hyphenated().to_string(),
            path,
            api_version,
            endpoint: provider.endpoint.clone(),
            http: provider.http.clone(),
            credential: Arc::clone(credential),
        })
    }

    pub fn subscription(&self) -> &str {
        &self.subscription
    }

    /// Collection URL at subscription scope
    pub fn collection_url(&self) -> String {
        format!(
            "{}/subscriptions/{}/{}?api-version={}",
            self.endpoint, self.subscription, self.path, self.api_version
        )
    }

    /// Collection URL below a parent resource id
    pub fn child_collection_url(&self, parent_id: &str) -> String {
        format!(
            "{}/{}/{}?api-version={}",
            self.endpoint,
            parent_id.trim_matches('/'),
            self.path,
            self.api_version
        )
    }

    /// Every record of the collection at subscription scope
    pub async fn list_raw(&self, cancel: &CancellationToken) -> Result<Vec<serde_json::Value>, ArmError> {
        self.fetch_all(self.collection_url(), cancel).await
    }

    /// Every record of the collection below `parent_id`
    pub async fn list_under(
        &self,
        parent_id: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<serde_json::Value>, ArmError> {
        self.fetch_all(self.child_collection_url(parent_id), cancel).await
    }

    async fn fetch_all(
        &self,
        url: String,
        cancel: &CancellationToken,
    ) -> Result<Vec<serde_json::Value>, ArmError> {
        let token = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(ArmError::Cancelled),
            token = self.credential.token() => token.map_err(ArmError::Credential)?,
        };

        let mut records = Vec::new();
        let mut seen = HashSet::new();
        let mut next = Some(url);
        while let Some(url) = next.take() {
            let page = tokio::select! {
                biased;
                () = cancel.cancelled() => return Err(ArmError::Cancelled),
                page = self.fetch_page(&url, &token) => page?,
            };

            debug!(url = %url, records = page.value.len(), "Fetched ARM page");
            records.extend(page.value);
            seen.insert(url);
            next = follow_link(&seen, page.next_link);
        }
        Ok(records)
    }

    async fn fetch_page(&self, url: &str, token: &str) -> Result<ArmPage, ArmError> {
        let response = self.http.get(url).bearer_auth(token).send().await?;
        Ok(response.error_for_status()?.json().await?)
    }
}

/// Next page to fetch; a link already fetched ends the listing
fn follow_link(seen: &HashSet<String>, next_link: Option<String>) -> Option<String> {
    match next_link {
        Some(link) if seen.contains(&link) => {
            warn!(url = %link, "ARM returned a nextLink that was already fetched");
            None
        }
        other => other,
    }
}

impl ApiHandle for ArmHandle {
    fn is_empty(&self) -> bool {
        self.subscription.is_empty() || self.path.is_empty()
    }
}

/// Handles for one subscription
pub struct AzureBundle {
    pub vnet: ArmHandle,
    /// List with [`ArmHandle::list_under`] and a VNet id
    pub vnet_peering: ArmHandle,
    pub nsg: ArmHandle,
    pub tags: ArmHandle,
}

impl ClientBundle for AzureBundle {
    fn handles(&self) -> Vec<(&'static str, &dyn ApiHandle)> {
        vec![
            ("VNet", &self.vnet),
            ("VNet Peering", &self.vnet_peering),
            ("Security Group", &self.nsg),
            ("Tag", &self.tags),
        ]
    }
}

/// Azure Resource Manager provider
pub struct AzureProvider {
    http: Client,
    endpoint: String,
}

impl AzureProvider {
    /// Provider against the public ARM endpoint
    pub fn new() -> Result<Self, ArmError> {
        Self::with_endpoint(ARM_ENDPOINT, Duration::from_secs(30))
    }

    /// Provider against a sovereign cloud or test endpoint
    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ArmError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        })
    }
}

impl CloudProvider for AzureProvider {
    const NAME: &'static str = PROVIDER_NAME;

    type Credential = AzureCredential;
    type Bundle = AzureBundle;

    fn build_bundle(
        &self,
        account: &AccountId,
        credential: &AzureCredential,
    ) -> Result<AzureBundle, RegistryError> {
        let vnet = checked_handle(
            account,
            "VNet",
            ArmHandle::new(
                self,
                account,
                credential,
                "providers/Microsoft.Network/virtualNetworks",
                NETWORK_API_VERSION,
            ),
        )?;
        let vnet_peering = checked_handle(
            account,
            "VNet Peering",
            ArmHandle::new(self, account, credential, "virtualNetworkPeerings", NETWORK_API_VERSION),
        )?;
        let nsg = checked_handle(
            account,
            "Security Group",
            ArmHandle::new(
                self,
                account,
                credential,
                "providers/Microsoft.Network/networkSecurityGroups",
                NETWORK_API_VERSION,
            ),
        )?;
        let tags = checked_handle(
            account,
            "Tag",
            ArmHandle::new(self, account, credential, "tagNames", RESOURCES_API_VERSION),
        )?;

        Ok(AzureBundle {
            vnet,
            vnet_peering,
            nsg,
            tags,
        })
    }
}
