// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Overridable lookup strategy behind every derived property of a node.
//!
//! Public accessors on [`XamlType`] never compute or cache anything; they
//! call the node's [`TypeLookup`]. The provided method bodies run the
//! reflection-derived algorithms in [`super::defaults`] and publish the
//! result into the node's [`super::TypeCache`]. A schema provider
//! implements the trait, overrides the lookups it has its own policy for and
//! inherits the rest; an override may reuse the cache slot or bypass it.
//!
//! Lookups that have no reflection-derived answer return
//! [`SchemaError::NotImplemented`] unless overridden.
//!
//! ```rust
//! use std::sync::Arc;
//! use xaml_schema::{SchemaContext, TypeLookup, XamlType};
//!
//! /// Treats every type as whitespace-significant.
//! struct PreserveWhitespace;
//!
//! impl TypeLookup for PreserveWhitespace {
//!     fn lookup_is_whitespace_significant_collection(&self, _ty: &XamlType) -> bool {
//!         true
//!     }
//! }
//!
//! let ctx = SchemaContext::with_core_library().unwrap();
//! let int = ctx.registry().get("System.Int32").unwrap();
//! let node = XamlType::new(int, &ctx).with_lookup(Arc::new(PreserveWhitespace));
//! assert!(node.is_whitespace_significant_collection());
//! assert!(!node.is_nullable());
//! ```

use super::{defaults, CollectionKind, XamlType};
use crate::converter::XamlValueConverter;
use crate::error::{Result, SchemaError};
use crate::handler::{SetMarkupExtensionHandler, SetTypeConverterHandler};
use crate::host::HostType;
use crate::invoker::XamlTypeInvoker;
use crate::member::XamlMember;
use std::sync::Arc;

/// Resolution strategy for the derived metadata of a [`XamlType`].
pub trait TypeLookup: Send + Sync {
    fn lookup_underlying_type(&self, ty: &XamlType) -> Option<HostType> {
        ty.cache()
            .underlying_type
            .get_or_init(|| ty.host_type().cloned())
            .clone()
    }

    fn lookup_invoker(&self, ty: &XamlType) -> Arc<XamlTypeInvoker> {
        Arc::clone(ty.declared_invoker())
    }

    fn lookup_base_type(&self, ty: &XamlType) -> Option<Arc<XamlType>> {
        ty.cache()
            .base_type
            .get_or_init(|| defaults::base_type(ty).map(Arc::new))
            .clone()
    }

    fn lookup_construction_requires_arguments(&self, ty: &XamlType) -> bool {
        *ty.cache()
            .construction_requires_arguments
            .get_or_init(|| defaults::construction_requires_arguments(ty))
    }

    fn lookup_is_constructible(&self, ty: &XamlType) -> bool {
        *ty.cache()
            .is_constructible
            .get_or_init(|| defaults::is_constructible(ty))
    }

    fn lookup_is_markup_extension(&self, ty: &XamlType) -> bool {
        *ty.cache()
            .is_markup_extension
            .get_or_init(|| defaults::is_markup_extension(ty))
    }

    fn lookup_is_name_scope(&self, ty: &XamlType) -> bool {
        *ty.cache()
            .is_name_scope
            .get_or_init(|| defaults::is_name_scope(ty))
    }

    fn lookup_is_nullable(&self, ty: &XamlType) -> bool {
        *ty.cache()
            .is_nullable
            .get_or_init(|| defaults::is_nullable(ty))
    }

    fn lookup_is_public(&self, ty: &XamlType) -> bool {
        *ty.cache().is_public.get_or_init(|| defaults::is_public(ty))
    }

    fn lookup_is_unknown(&self, ty: &XamlType) -> bool {
        *ty.cache()
            .is_unknown
            .get_or_init(|| defaults::is_unknown(ty))
    }

    fn lookup_is_ambient(&self, ty: &XamlType) -> bool {
        *ty.cache()
            .is_ambient
            .get_or_init(|| defaults::is_ambient(ty))
    }

    fn lookup_usable_during_initialization(&self, ty: &XamlType) -> bool {
        *ty.cache()
            .is_usable_during_initialization
            .get_or_init(|| defaults::usable_during_initialization(ty))
    }

    fn lookup_is_whitespace_significant_collection(&self, ty: &XamlType) -> bool {
        *ty.cache()
            .is_whitespace_significant_collection
            .get_or_init(|| defaults::is_whitespace_significant_collection(ty))
    }

    fn lookup_trim_surrounding_whitespace(&self, ty: &XamlType) -> bool {
        *ty.cache()
            .trim_surrounding_whitespace
            .get_or_init(|| defaults::trim_surrounding_whitespace(ty))
    }

    fn lookup_is_x_data(&self, ty: &XamlType) -> bool {
        *ty.cache()
            .is_x_data
            .get_or_init(|| defaults::is_x_data(ty))
    }

    fn lookup_is_collection(&self, ty: &XamlType) -> bool {
        *ty.cache()
            .is_collection
            .get_or_init(|| defaults::is_collection(ty))
    }

    fn lookup_is_dictionary(&self, ty: &XamlType) -> bool {
        *ty.cache()
            .is_dictionary
            .get_or_init(|| defaults::is_dictionary(ty))
    }

    fn lookup_item_type(&self, ty: &XamlType) -> Option<Arc<XamlType>> {
        ty.cache()
            .item_type
            .get_or_init(|| defaults::item_type(ty).map(Arc::new))
            .clone()
    }

    fn lookup_key_type(&self, ty: &XamlType) -> Option<Arc<XamlType>> {
        ty.cache()
            .key_type
            .get_or_init(|| defaults::key_type(ty).map(Arc::new))
            .clone()
    }

    fn lookup_markup_extension_return_type(&self, ty: &XamlType) -> Option<Arc<XamlType>> {
        ty.cache()
            .markup_extension_return_type
            .get_or_init(|| defaults::markup_extension_return_type(ty).map(Arc::new))
            .clone()
    }

    fn lookup_content_property(&self, ty: &XamlType) -> Option<Arc<XamlMember>> {
        ty.cache()
            .content_property
            .get_or_init(|| defaults::content_property(ty))
            .clone()
    }

    /// Find a writable property or an event named `name`.
    ///
    /// With `skip_read_only_check` a read-only property also qualifies.
    fn lookup_member(
        &self,
        ty: &XamlType,
        name: &str,
        skip_read_only_check: bool,
    ) -> Option<Arc<XamlMember>> {
        ty.cache()
            .member_or_insert_with(name, skip_read_only_check, || {
                defaults::member(ty, name, skip_read_only_check)
            })
    }

    fn lookup_set_markup_extension_handler(
        &self,
        ty: &XamlType,
    ) -> Result<Option<SetMarkupExtensionHandler>> {
        ty.cache()
            .set_markup_extension_handler
            .get_or_init(|| defaults::set_markup_extension_handler(ty))
            .clone()
    }

    fn lookup_set_type_converter_handler(
        &self,
        ty: &XamlType,
    ) -> Result<Option<SetTypeConverterHandler>> {
        ty.cache()
            .set_type_converter_handler
            .get_or_init(|| defaults::set_type_converter_handler(ty))
            .clone()
    }

    fn lookup_attachable_member(
        &self,
        _ty: &XamlType,
        _name: &str,
    ) -> Result<Option<Arc<XamlMember>>> {
        Err(SchemaError::not_implemented("lookup_attachable_member"))
    }

    fn lookup_all_members(&self, _ty: &XamlType) -> Result<Vec<Arc<XamlMember>>> {
        Err(SchemaError::not_implemented("lookup_all_members"))
    }

    fn lookup_all_attachable_members(&self, _ty: &XamlType) -> Result<Vec<Arc<XamlMember>>> {
        Err(SchemaError::not_implemented("lookup_all_attachable_members"))
    }

    /// Member aliased by a language directive (`Name`, `Key`, `Uid`, `Lang`).
    fn lookup_aliased_property(
        &self,
        _ty: &XamlType,
        _directive: &str,
    ) -> Result<Option<Arc<XamlMember>>> {
        Err(SchemaError::not_implemented("lookup_aliased_property"))
    }

    fn lookup_allowed_content_types(&self, _ty: &XamlType) -> Result<Vec<Arc<XamlType>>> {
        Err(SchemaError::not_implemented("lookup_allowed_content_types"))
    }

    fn lookup_content_wrappers(&self, _ty: &XamlType) -> Result<Vec<Arc<XamlType>>> {
        Err(SchemaError::not_implemented("lookup_content_wrappers"))
    }

    fn lookup_collection_kind(&self, _ty: &XamlType) -> Result<CollectionKind> {
        Err(SchemaError::not_implemented("lookup_collection_kind"))
    }

    fn lookup_custom_attribute_provider(&self, _ty: &XamlType) -> Result<Option<HostType>> {
        Err(SchemaError::not_implemented("lookup_custom_attribute_provider"))
    }

    fn lookup_type_converter(&self, _ty: &XamlType) -> Result<Option<XamlValueConverter>> {
        Err(SchemaError::not_implemented("lookup_type_converter"))
    }

    fn lookup_value_serializer(&self, _ty: &XamlType) -> Result<Option<XamlValueConverter>> {
        Err(SchemaError::not_implemented("lookup_value_serializer"))
    }

    fn lookup_deferring_loader(&self, _ty: &XamlType) -> Result<Option<XamlValueConverter>> {
        Err(SchemaError::not_implemented("lookup_deferring_loader"))
    }

    fn lookup_positional_parameters(
        &self,
        _ty: &XamlType,
        _parameter_count: usize,
    ) -> Result<Vec<Arc<XamlType>>> {
        Err(SchemaError::not_implemented("lookup_positional_parameters"))
    }

    fn lookup_xaml_namespaces(&self, _ty: &XamlType) -> Result<Vec<String>> {
        Err(SchemaError::not_implemented("get_xaml_namespaces"))
    }

    fn lookup_can_assign_to(&self, _ty: &XamlType, _target: &XamlType) -> Result<bool> {
        Err(SchemaError::not_implemented("can_assign_to"))
    }
}

/// Strategy running every default algorithm unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultLookup;

impl TypeLookup for DefaultLookup {}
