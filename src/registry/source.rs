// Copyright (c) 2025 - Cowboy AI, Inc.
//! Credential and account sources consumed at registry startup

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Boxed error from an external source, kept verbatim
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Cloud account identifier (AWS account id, Azure subscription id, GCP project)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for AccountId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Supplies the top-level credential shared by every account's handles
#[async_trait]
pub trait CredentialSource: Send + Sync {
    type Credential: Send + Sync;

    async fn credential(&self) -> Result<Self::Credential, SourceError>;
}

/// Credential that is already in hand
pub struct StaticCredential<C>(pub C);

#[async_trait]
impl<C: Clone + Send + Sync> CredentialSource for StaticCredential<C> {
    type Credential = C;

    async fn credential(&self) -> Result<C, SourceError> {
        Ok(self.0.clone())
    }
}

/// Supplies the accounts to provision; entries are trusted as valid
#[async_trait]
pub trait AccountSource: Send + Sync {
    async fn accounts(&self) -> Result<Vec<AccountId>, SourceError>;
}

/// Fixed account list
#[derive(Debug, Clone, Default)]
pub struct StaticAccounts(pub Vec<AccountId>);

impl StaticAccounts {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<AccountId>,
    {
        Self(ids.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl AccountSource for StaticAccounts {
    async fn accounts(&self) -> Result<Vec<AccountId>, SourceError> {
        Ok(self.0.clone())
    }
}

/// Comma separated account list read from an environment variable
#[derive(Debug, Clone)]
pub struct EnvAccounts {
    pub var: String,
}

impl EnvAccounts {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

/// Split a comma separated list, dropping blanks
pub fn parse_account_list(raw: &str) -> Vec<AccountId> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(AccountId::from)
        .collect()
}

#[async_trait]
impl AccountSource for EnvAccounts {
    async fn accounts(&self) -> Result<Vec<AccountId>, SourceError> {
        let raw = std::env::var(&self.var)
            .map_err(|e| SourceError::from(format!("{}: {}", self.var, e)))?;
        Ok(parse_account_list(&raw))
    }
}
