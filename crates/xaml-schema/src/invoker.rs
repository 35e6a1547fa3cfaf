// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Construction/invocation collaborator attached to each type node.
//!
//! Nodes only record which invoker applies; activating instances and
//! calling members is left to the object writer consuming the node.

/// Invoker bound to one schema type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct XamlTypeInvoker {
    target: Option<String>,
}

impl XamlTypeInvoker {
    /// Invoker bound to the type displayed as `target_type`.
    pub fn new(target_type: impl Into<String>) -> Self {
        Self {
            target: Some(target_type.into()),
        }
    }

    /// Invoker that is not bound to any type and cannot construct anything.
    pub fn unknown() -> Self {
        Self { target: None }
    }

    /// Display name of the type this invoker serves.
    pub fn target_type(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn is_unknown(&self) -> bool {
        self.target.is_none()
    }
}
