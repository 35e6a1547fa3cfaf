// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for type-node construction and metadata lookups.

use std::fmt;

/// Failure modes surfaced by schema type nodes and their collaborators.
///
/// "Not found" outcomes (missing member, no content property, no handler
/// declared) are never errors; they are reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The lookup has no default algorithm and no override supplied one.
    NotImplemented {
        /// Lookup operation that was requested.
        operation: &'static str,
    },
    /// A marker declares a handler method that the host type does not provide.
    HandlerBinding {
        /// Handler kind (e.g. "XamlSetMarkupExtensionHandler").
        handler: &'static str,
        /// Full name of the host type carrying the marker.
        type_name: String,
        /// Declared method name.
        method: String,
    },
    /// A well-known host type named in the settings is not registered.
    UnknownHostType(String),
    /// Settings document could not be parsed.
    Config(String),
    /// Settings file could not be read.
    Io(String),
}

impl SchemaError {
    /// Shorthand for [`SchemaError::NotImplemented`].
    pub fn not_implemented(operation: &'static str) -> Self {
        Self::NotImplemented { operation }
    }

    /// Returns `true` for the "policy not supplied" class of failures.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotImplemented { operation } => write!(
                f,
                "{} is not implemented: supply it through a derived lookup or the schema context",
                operation
            ),
            Self::HandlerBinding {
                handler,
                type_name,
                method,
            } => write!(
                f,
                "binding to {} failed: {} has no static method '{}'",
                handler, type_name, method
            ),
            Self::UnknownHostType(name) => write!(f, "host type not registered: {}", name),
            Self::Config(msg) => write!(f, "invalid schema settings: {}", msg),
            Self::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for SchemaError {}

impl From<serde_yaml::Error> for SchemaError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<std::io::Error> for SchemaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, SchemaError>;
