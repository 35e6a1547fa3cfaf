// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema settings.
//!
//! Everything the type nodes treat as policy rather than derivable fact lives
//! here: the canonical schema namespace, the assembly that hosts the schema's
//! own built-in library, the allow-list of predefined built-in types and the
//! names of the well-known host types the default lookups compare against.
//!
//! # Example YAML
//!
//! ```yaml
//! schema_namespace: "http://schemas.microsoft.com/winfx/2006/xaml"
//! library_assembly: System.Xaml
//! predefined_types:
//!   - System.Uri
//!   - System.TimeSpan
//! intern_nodes: true
//! ```
//!
//! Omitted keys keep their defaults.

use crate::error::Result;
use crate::language::XAML_2006_NAMESPACE;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Host types placed in the schema namespace even though they are not primitives.
pub const DEFAULT_PREDEFINED_TYPES: &[&str] = &[
    "System.Windows.Markup.XData",
    "System.Uri",
    "System.TimeSpan",
    "System.Windows.Markup.PropertyDefinition",
    "System.Windows.Markup.MemberDefinition",
    "System.Windows.Markup.Reference",
];

/// Settings shared by every node created under one schema context.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SchemaSettings {
    /// Namespace assigned to primitives, predefined types and library markup extensions.
    pub schema_namespace: String,
    /// Assembly name of the schema's own built-in library.
    pub library_assembly: String,
    /// Full names of the predefined built-in types.
    pub predefined_types: Vec<String>,
    /// Full name of the universal object type.
    pub object_type: String,
    /// Full name of the time-interval primitive exempt from constructor checks.
    pub time_span_type: String,
    /// Full name of the host type describing type nodes themselves.
    pub type_node_type: String,
    /// Whether the schema context interns nodes by host type.
    pub intern_nodes: bool,
}

impl Default for SchemaSettings {
    fn default() -> Self {
        Self {
            schema_namespace: XAML_2006_NAMESPACE.to_string(),
            library_assembly: "System.Xaml".to_string(),
            predefined_types: DEFAULT_PREDEFINED_TYPES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            object_type: "System.Object".to_string(),
            time_span_type: "System.TimeSpan".to_string(),
            type_node_type: "System.Xaml.XamlType".to_string(),
            intern_nodes: true,
        }
    }
}

impl SchemaSettings {
    /// Parse settings from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let settings: SchemaSettings = serde_yaml::from_str(yaml)?;
        log::debug!(
            "[SchemaSettings::from_yaml_str] loaded {} predefined types",
            settings.predefined_types.len()
        );
        Ok(settings)
    }

    /// Load settings from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Check whether a host type full name is in the predefined allow-list.
    pub fn is_predefined(&self, full_name: &str) -> bool {
        self.predefined_types.iter().any(|t| t == full_name)
    }
}
