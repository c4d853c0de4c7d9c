// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory Query Tool
//!
//! Opens the configured resource store and prints one kind's collection as
//! JSON, one object per line.
//!
//! Run with: cargo run --bin inventory-query -- <kind>
//!
//! Environment:
//! 1. INVENTORY_STORE (default: memory://, e.g. nats://localhost:4222/INVENTORY)
//! 2. NATS_CONNECT_TIMEOUT_SECS (default: 10)
//!
//! `inventory-query kinds` lists the catalog instead.
//!
//! `inventory-query accounts` (built with `--features azure`) builds the client
//! registry for INVENTORY_PROVIDER over INVENTORY_ACCOUNTS, using the bearer
//! token in AZURE_ACCESS_TOKEN, and prints every provisioned account.

use anyhow::{bail, Context, Result};
use cim_infrastructure_inventory::{InventoryConfig, ResourceKind};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let Some(arg) = std::env::args().nth(1) else {
        bail!("usage: inventory-query <kind|kinds|accounts>");
    };

    if arg == "kinds" {
        for kind in ResourceKind::ALL {
            println!("{}\t{}", kind.collection(), kind.display_name());
        }
        return Ok(());
    }

    let config = InventoryConfig::from_env().context("Failed to load configuration")?;

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling query");
            ctrl_c.cancel();
        }
    });

    if arg == "accounts" {
        return list_accounts(&config, &cancel).await;
    }

    let kind: ResourceKind = arg
        .parse()
        .with_context(|| format!("Unknown resource kind '{}'", arg))?;
    info!(store = %config.store_location, %kind, "Querying inventory");

    let store = config
        .open_store(&cancel)
        .await
        .context("Failed to open resource store")?;

    let result = store.list_values(kind, &cancel).await;
    store
        .close(&cancel)
        .await
        .context("Failed to close resource store")?;

    let records = result.with_context(|| format!("Failed to list {}", kind))?;
    for record in &records {
        println!("{}", serde_json::to_string(record)?);
    }
    info!(%kind, count = records.len(), "Query complete");

    Ok(())
}

#[cfg(feature = "azure")]
async fn list_accounts(config: &InventoryConfig, cancel: &CancellationToken) -> Result<()> {
    use cim_infrastructure_inventory::providers::azure::{AzureProvider, EnvironmentCredential};

    let provider = AzureProvider::new().context("Failed to build ARM HTTP client")?;
    let registry = config
        .connect_registry(&provider, &EnvironmentCredential::default(), cancel)
        .await
        .context("Failed to build account client registry")?;

    let mut accounts: Vec<_> = registry.accounts().collect();
    accounts.sort();
    for account in accounts {
        println!("{}\t{}", registry.provider_name(), account);
    }
    info!(count = registry.len(), "Registry ready");
    Ok(())
}

#[cfg(not(feature = "azure"))]
async fn list_accounts(config: &InventoryConfig, _cancel: &CancellationToken) -> Result<()> {
    bail!(
        "no client registry for provider '{}': rebuild with --features azure",
        config.provider
    )
}
