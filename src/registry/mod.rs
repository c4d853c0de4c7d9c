// Copyright (c) 2025 - Cowboy AI, Inc.
//! Account Client Registry
//!
//! Builds one bundle of credentialed provider-API handles per cloud account
//! and holds them, read-only, for the life of the process. The registry is an
//! ordinary value: construct it at startup and hand it (or an `Arc` of it) to
//! whoever needs per-account handles.
//!
//! # Construction Is All-or-Nothing
//!
//! ```text
//! credential ─┐
//!             ├─> for each account: build_bundle ──> checked_handle (x N) ──> verify_bundle
//! accounts  ──┘                                          │ any failure
//!                                                        ▼
//!                                               Err(Construction), no registry
//! ```
//!
//! Every handle passes two checks: the constructor must not fail, and the
//! handle it returned must not be empty. Both failures name the account and
//! the handle.

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

pub mod source;

pub use source::{
    parse_account_list, AccountId, AccountSource, CredentialSource, EnvAccounts, SourceError,
    StaticAccounts, StaticCredential,
};

/// Why a handle could not be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionFailure {
    /// Constructor returned an error (transport, auth, bad input)
    Constructor(String),
    /// Constructor succeeded but produced an unusable handle
    EmptyHandle,
}

impl fmt::Display for ConstructionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constructor(reason) => write!(f, "{}", reason),
            Self::EmptyHandle => f.write_str("got empty client"),
        }
    }
}

/// Account client registry errors
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The shared credential could not be obtained
    #[error("Failed to obtain a credential: {0}")]
    Credential(#[source] SourceError),

    /// The account list could not be read
    #[error("Failed to list accounts: {0}")]
    AccountSource(#[source] SourceError),

    /// A handle for one account could not be built
    #[error("Failed to create {handle} client for account '{account}': {reason}")]
    Construction {
        account: AccountId,
        handle: String,
        reason: ConstructionFailure,
    },

    /// No bundle registered for the account
    #[error("No client bundle for account '{0}'")]
    AccountNotFound(AccountId),

    /// Initialization cancelled before completion
    #[error("Registry initialization cancelled")]
    Cancelled,
}

impl RegistryError {
    pub fn construction(account: &AccountId, handle: &str, reason: ConstructionFailure) -> Self {
        Self::Construction {
            account: account.clone(),
            handle: handle.to_string(),
            reason,
        }
    }
}

/// Provider-API handle scoped to one account
pub trait ApiHandle: Send + Sync {
    /// True when the handle looks constructed but cannot be used
    fn is_empty(&self) -> bool;
}

/// Validate a handle constructor's result: error first, then emptiness
pub fn checked_handle<H, E>(
    account: &AccountId,
    handle: &str,
    result: Result<H, E>,
) -> Result<H, RegistryError>
where
    H: ApiHandle,
    E: fmt::Display,
{
    let built = result.map_err(|e| {
        RegistryError::construction(account, handle, ConstructionFailure::Constructor(e.to_string()))
    })?;
    if built.is_empty() {
        return Err(RegistryError::construction(
            account,
            handle,
            ConstructionFailure::EmptyHandle,
        ));
    }
    Ok(built)
}

/// Fixed set of handles for one account
pub trait ClientBundle: Send + Sync {
    /// Every handle with its name
    fn handles(&self) -> Vec<(&'static str, &dyn ApiHandle)>;

    fn is_complete(&self) -> bool {
        self.handles().iter().all(|(_, handle)| !handle.is_empty())
    }
}

/// A cloud whose accounts the registry can provision
pub trait CloudProvider: Send + Sync {
    /// Identity written as `provider` on every stored object
    const NAME: &'static str;

    type Credential: Send + Sync;
    type Bundle: ClientBundle;

    /// Build every handle for `account`; use [`checked_handle`] per handle
    fn build_bundle(
        &self,
        account: &AccountId,
        credential: &Self::Credential,
    ) -> Result<Self::Bundle, RegistryError>;
}

/// Per-account client bundles, immutable once built
pub struct AccountClientRegistry<P: CloudProvider> {
    bundles: HashMap<AccountId, P::Bundle>,
}

impl<P: CloudProvider> AccountClientRegistry<P> {
    /// Build a bundle for every account or fail without a registry
    pub fn initialize(
        provider: &P,
        credential: &P::Credential,
        accounts: &[AccountId],
        cancel: &CancellationToken,
    ) -> Result<Self, RegistryError> {
        if accounts.is_empty() {
            warn!(provider = P::NAME, "No accounts to provision");
        }

        let mut bundles = HashMap::with_capacity(accounts.len());
        for account in accounts {
            if cancel.is_cancelled() {
                return Err(RegistryError::Cancelled);
            }
            if bundles.contains_key(account) {
                debug!(%account, "Skipping duplicate account");
                continue;
            }

            let bundle = provider.build_bundle(account, credential)?;
            verify_bundle(account, &bundle)?;
            debug!(%account, provider = P::NAME, "Built client bundle");
            bundles.insert(account.clone(), bundle);
        }

        info!(
            provider = P::NAME,
            accounts = bundles.len(),
            "Account client registry initialized"
        );
        Ok(Self { bundles })
    }

    /// Obtain the credential, list accounts, then [`initialize`](Self::initialize)
    pub async fn connect<C, A>(
        provider: &P,
        credentials: &C,
        accounts: &A,
        cancel: &CancellationToken,
    ) -> Result<Self, RegistryError>
    where
        C: CredentialSource<Credential = P::Credential>,
        A: AccountSource,
    {
        let credential = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(RegistryError::Cancelled),
            credential = credentials.credential() => credential.map_err(RegistryError::Credential)?,
        };
        let accounts = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(RegistryError::Cancelled),
            accounts = accounts.accounts() => accounts.map_err(RegistryError::AccountSource)?,
        };

        Self::initialize(provider, &credential, &accounts, cancel)
    }

    /// Handle bundle for `account`
    pub fn bundle(&self, account: &str) -> Result<&P::Bundle, RegistryError> {
        self.bundles
            .get(account)
            .ok_or_else(|| RegistryError::AccountNotFound(AccountId::from(account)))
    }

    /// Provider identity used to tag stored objects
    pub fn provider_name(&self) -> &'static str {
        P::NAME
    }

    /// Registered accounts, in no particular order
    pub fn accounts(&self) -> impl Iterator<Item = &AccountId> {
        self.bundles.keys()
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

fn verify_bundle<B: ClientBundle>(account: &AccountId, bundle: &B) -> Result<(), RegistryError> {
    for (name, handle) in bundle.handles() {
        if handle.is_empty() {
            return Err(RegistryError::construction(
                account,
                name,
                ConstructionFailure::EmptyHandle,
            ));
        }
    }
    Ok(())
}
