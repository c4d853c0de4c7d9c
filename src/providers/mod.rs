// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cloud provider adapters
//!
//! Each adapter implements [`CloudProvider`](crate::registry::CloudProvider)
//! and is gated behind a cargo feature of the same name.

#[cfg(feature = "azure")]
pub mod azure;

#[cfg(feature = "azure")]
pub use azure::{AzureBundle, AzureProvider};
