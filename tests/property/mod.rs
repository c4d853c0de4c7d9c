// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! This module contains property-based tests using proptest to verify
//! store and key properties that must hold for all valid inputs.

mod keys;
mod store_contract;
