// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Per-node memo slots for derived metadata.
//!
//! Each slot is written at most once. "No value" (`None`, `false`, an
//! error) is a result like any other and is never recomputed. Lookups that
//! override a default can publish into the same slots to keep the
//! memoization contract.

use super::XamlType;
use crate::converter::XamlValueConverter;
use crate::error::Result;
use crate::handler::{SetMarkupExtensionHandler, SetTypeConverterHandler};
use crate::host::HostType;
use crate::member::XamlMember;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

type MemberKey = (String, bool);

#[derive(Default)]
pub struct TypeCache {
    pub underlying_type: OnceLock<Option<HostType>>,
    pub base_type: OnceLock<Option<Arc<XamlType>>>,
    pub construction_requires_arguments: OnceLock<bool>,
    pub is_constructible: OnceLock<bool>,
    pub is_markup_extension: OnceLock<bool>,
    pub is_name_scope: OnceLock<bool>,
    pub is_nullable: OnceLock<bool>,
    pub is_public: OnceLock<bool>,
    pub is_unknown: OnceLock<bool>,
    pub is_ambient: OnceLock<bool>,
    pub is_usable_during_initialization: OnceLock<bool>,
    pub is_whitespace_significant_collection: OnceLock<bool>,
    pub trim_surrounding_whitespace: OnceLock<bool>,
    pub is_x_data: OnceLock<bool>,
    pub is_collection: OnceLock<bool>,
    pub is_dictionary: OnceLock<bool>,
    pub item_type: OnceLock<Option<Arc<XamlType>>>,
    pub key_type: OnceLock<Option<Arc<XamlType>>>,
    pub markup_extension_return_type: OnceLock<Option<Arc<XamlType>>>,
    pub content_property: OnceLock<Option<Arc<XamlMember>>>,
    pub all_members: OnceLock<Vec<Arc<XamlMember>>>,
    pub all_attachable_members: OnceLock<Vec<Arc<XamlMember>>>,
    pub allowed_content_types: OnceLock<Vec<Arc<XamlType>>>,
    pub content_wrappers: OnceLock<Vec<Arc<XamlType>>>,
    pub type_converter: OnceLock<Option<XamlValueConverter>>,
    pub value_serializer: OnceLock<Option<XamlValueConverter>>,
    pub deferring_loader: OnceLock<Option<XamlValueConverter>>,
    pub set_markup_extension_handler: OnceLock<Result<Option<SetMarkupExtensionHandler>>>,
    pub set_type_converter_handler: OnceLock<Result<Option<SetTypeConverterHandler>>>,
    members: RwLock<HashMap<MemberKey, Option<Arc<XamlMember>>>>,
}

impl TypeCache {
    /// Memoized member lookup keyed by name and read-only eligibility.
    ///
    /// `resolve` runs outside the lock; when two callers race, the first
    /// published result is the one every caller gets back.
    pub fn member_or_insert_with<F>(
        &self,
        name: &str,
        skip_read_only_check: bool,
        resolve: F,
    ) -> Option<Arc<XamlMember>>
    where
        F: FnOnce() -> Option<XamlMember>,
    {
        let key = (name.to_string(), skip_read_only_check);
        if let Some(hit) = self.members.read().get(&key) {
            return hit.clone();
        }

        let resolved = resolve().map(Arc::new);
        self.members.write().entry(key).or_insert(resolved).clone()
    }

    /// Number of memoized member lookups (hits and misses alike).
    pub fn cached_member_count(&self) -> usize {
        self.members.read().len()
    }
}
