// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema context shared by every type node of one resolution session.
//!
//! The context owns the host type registry, the [`SchemaSettings`] policy,
//! the well-known host types the default lookups compare against, the lookup
//! strategy new nodes start with, and an optional interning table that hands
//! out one node per host type while that node is alive.

use crate::config::SchemaSettings;
use crate::error::Result;
use crate::host::{HostType, HostTypeRegistry};
use crate::xaml_type::{DefaultLookup, TypeLookup, XamlType};
use dashmap::DashMap;
use std::fmt;
use std::sync::{Arc, Weak};

/// Interning misses between two sweeps of dead entries.
const PURGE_INTERVAL: usize = 64;

/// Owning registry and shared facilities for type nodes.
pub struct SchemaContext {
    registry: Arc<HostTypeRegistry>,
    settings: SchemaSettings,
    object_type: HostType,
    time_span_type: Option<HostType>,
    type_node_type: Option<HostType>,
    lookup: Arc<dyn TypeLookup>,
    // Weak so interned nodes (which point back at the context) do not form a cycle.
    interned: DashMap<HostType, Weak<XamlType>>,
}

impl SchemaContext {
    /// Create a context using the default lookup strategy.
    ///
    /// Fails when the object type named in `settings` is not registered.
    pub fn new(registry: Arc<HostTypeRegistry>, settings: SchemaSettings) -> Result<Arc<Self>> {
        Self::with_lookup(registry, settings, Arc::new(DefaultLookup))
    }

    /// Create a context whose nodes start with `lookup` as their strategy.
    pub fn with_lookup(
        registry: Arc<HostTypeRegistry>,
        settings: SchemaSettings,
        lookup: Arc<dyn TypeLookup>,
    ) -> Result<Arc<Self>> {
        let object_type = registry.require(&settings.object_type)?;
        let time_span_type = registry.get(&settings.time_span_type);
        let type_node_type = registry.get(&settings.type_node_type);
        if time_span_type.is_none() {
            log::debug!(
                "[SchemaContext::new] time span type '{}' not registered",
                settings.time_span_type
            );
        }
        if type_node_type.is_none() {
            log::debug!(
                "[SchemaContext::new] type node type '{}' not registered",
                settings.type_node_type
            );
        }

        Ok(Arc::new(Self {
            registry,
            settings,
            object_type,
            time_span_type,
            type_node_type,
            lookup,
            interned: DashMap::new(),
        }))
    }

    /// Context over the core library with default settings.
    pub fn with_core_library() -> Result<Arc<Self>> {
        Self::new(
            Arc::new(HostTypeRegistry::with_core_library()),
            SchemaSettings::default(),
        )
    }

    pub fn registry(&self) -> &Arc<HostTypeRegistry> {
        &self.registry
    }

    pub fn settings(&self) -> &SchemaSettings {
        &self.settings
    }

    /// The universal object type.
    pub fn object_type(&self) -> &HostType {
        &self.object_type
    }

    /// The time-interval primitive exempt from constructor checks.
    pub fn time_span_type(&self) -> Option<&HostType> {
        self.time_span_type.as_ref()
    }

    /// The host type describing type nodes themselves.
    pub fn type_node_type(&self) -> Option<&HostType> {
        self.type_node_type.as_ref()
    }

    /// Strategy assigned to nodes created under this context.
    pub fn default_lookup(&self) -> Arc<dyn TypeLookup> {
        Arc::clone(&self.lookup)
    }

    /// Node for `host`, shared with other callers while it is alive.
    ///
    /// With interning disabled every call creates a fresh node.
    pub fn get_xaml_type(self: &Arc<Self>, host: &HostType) -> Arc<XamlType> {
        if !self.settings.intern_nodes {
            return Arc::new(XamlType::new(host.clone(), self));
        }

        if let Some(existing) = self.interned.get(host).and_then(|weak| weak.upgrade()) {
            return existing;
        }

        let node = {
            let mut entry = self.interned.entry(host.clone()).or_default();
            if let Some(existing) = entry.upgrade() {
                return existing;
            }
            let node = Arc::new(XamlType::new(host.clone(), self));
            *entry = Arc::downgrade(&node);
            node
        };
        log::trace!("[SchemaContext::get_xaml_type] interned {}", node);

        if self.interned.len() % PURGE_INTERVAL == 0 {
            self.purge_dead();
        }
        node
    }

    /// Drop interning entries whose node is gone; returns how many were removed.
    pub fn purge_dead(&self) -> usize {
        let before = self.interned.len();
        self.interned.retain(|_, weak| weak.strong_count() > 0);
        let removed = before.saturating_sub(self.interned.len());
        if removed > 0 {
            log::debug!("[SchemaContext::purge_dead] removed {} dead entries", removed);
        }
        removed
    }

    /// Node for the host type registered under `full_name`.
    pub fn get_xaml_type_by_name(self: &Arc<Self>, full_name: &str) -> Result<Arc<XamlType>> {
        let host = self.registry.require(full_name)?;
        Ok(self.get_xaml_type(&host))
    }

    /// Number of interned nodes still alive.
    pub fn interned_count(&self) -> usize {
        self.interned
            .iter()
            .filter(|entry| entry.value().strong_count() > 0)
            .count()
    }
}

impl fmt::Debug for SchemaContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaContext")
            .field("settings", &self.settings)
            .field("object_type", &self.object_type)
            .field("registered_types", &self.registry.len())
            .finish_non_exhaustive()
    }
}
