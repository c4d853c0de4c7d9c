// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource store errors

use std::fmt;
use thiserror::Error;

use super::engine::EngineError;
use crate::kind::ResourceKind;

/// Store operation, carried in error context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Open,
    Close,
    DropDb,
    Put,
    Get,
    List,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::DropDb => "drop_db",
            Self::Put => "put",
            Self::Get => "get",
            Self::List => "list",
            Self::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Errors returned by the resource store
#[derive(Debug, Error)]
pub enum StoreError {
    /// No object with this id in the kind's collection
    #[error("{kind} '{id}' not found")]
    NotFound { kind: ResourceKind, id: String },

    /// Operation attempted before `open`
    #[error("Store is not open")]
    NotOpen,

    /// Operation attempted after `close`
    #[error("Store is closed")]
    Closed,

    /// `open` called on an open store
    #[error("Store is already open at {0}")]
    AlreadyOpen(String),

    /// Kind name outside the catalog
    #[error("Unknown resource kind: {0}")]
    UnknownKind(String),

    /// Object violates the stored object contract
    #[error("Invalid {kind} object '{id}': {reason}")]
    InvalidObject {
        kind: ResourceKind,
        id: String,
        reason: String,
    },

    /// Store location could not be parsed
    #[error("Invalid store location '{location}': {reason}")]
    InvalidLocation { location: String, reason: String },

    /// Payload could not be encoded or decoded
    #[error("Serialization error for {kind} '{id}': {message}")]
    Serialization {
        kind: ResourceKind,
        id: String,
        message: String,
    },

    /// Backing engine failure
    #[error("Storage engine failed during {operation}{}: {source}", target_suffix(.kind, .id))]
    Io {
        operation: Operation,
        kind: Option<ResourceKind>,
        id: Option<String>,
        #[source]
        source: EngineError,
    },

    /// Cancelled before completion
    #[error("Store {0} cancelled")]
    Cancelled(Operation),
}

fn target_suffix(kind: &Option<ResourceKind>, id: &Option<String>) -> String {
    match (kind, id) {
        (Some(kind), Some(id)) => format!(" on {} '{}'", kind, id),
        (Some(kind), None) => format!(" on {}", kind),
        _ => String::new(),
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// Engine failure without a record target
    pub fn engine(operation: Operation, source: EngineError) -> Self {
        Self::Io {
            operation,
            kind: None,
            id: None,
            source,
        }
    }

    /// Engine failure on one record or collection
    pub fn engine_at(
        operation: Operation,
        kind: ResourceKind,
        id: Option<&str>,
        source: EngineError,
    ) -> Self {
        Self::Io {
            operation,
            kind: Some(kind),
            id: id.map(str::to_string),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}
