// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema type nodes.
//!
//! A [`XamlType`] represents one schema-level type, either backed by a host
//! type or "unknown" (identified only by namespace, name and type arguments).
//! Its identity is fixed at construction. Everything else (base type,
//! collection shape, constructibility, content property, handlers, ...) is
//! derived on first request through the node's [`TypeLookup`] and memoized
//! for the node's lifetime.
//!
//! # Example
//!
//! ```rust
//! use xaml_schema::{SchemaContext, XamlType};
//!
//! let ctx = SchemaContext::with_core_library().unwrap();
//! let widget = XamlType::unknown("ns", "Widget", None, &ctx);
//!
//! assert!(widget.is_unknown());
//! assert_eq!(widget.base_type().unwrap().name(), "Object");
//! assert_eq!(widget, XamlType::unknown("ns", "Widget", None, &ctx));
//! ```

mod binding;
mod cache;
pub mod defaults;
mod lookup;

pub use cache::TypeCache;
pub use lookup::{DefaultLookup, TypeLookup};

use crate::context::SchemaContext;
use crate::converter::XamlValueConverter;
use crate::error::Result;
use crate::handler::{SetMarkupExtensionHandler, SetTypeConverterHandler};
use crate::host::{Capability, HostType, HostTypeDescriptor, TypeCode};
use crate::invoker::XamlTypeInvoker;
use crate::language;
use crate::member::XamlMember;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// How a type collects its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    None,
    Collection,
    Dictionary,
    Array,
}

/// One schema-level type.
pub struct XamlType {
    host_type: Option<HostType>,
    name: String,
    preferred_namespace: String,
    type_arguments: Option<Vec<Arc<XamlType>>>,
    schema_context: Arc<SchemaContext>,
    invoker: Arc<XamlTypeInvoker>,
    lookup: Arc<dyn TypeLookup>,
    cache: TypeCache,
}

impl XamlType {
    /// Node backed by `host`, with an invoker bound to the new node.
    pub fn new(host: HostType, schema_context: &Arc<SchemaContext>) -> Self {
        Self::with_invoker(host, schema_context, None)
    }

    /// Node backed by `host`; `None` binds a default invoker to the new node.
    pub fn with_invoker(
        host: HostType,
        schema_context: &Arc<SchemaContext>,
        invoker: Option<Arc<XamlTypeInvoker>>,
    ) -> Self {
        let name = language::xaml_name_of(host.name()).to_string();
        let preferred_namespace = preferred_namespace_of(&host, schema_context);
        let invoker =
            invoker.unwrap_or_else(|| Arc::new(XamlTypeInvoker::new(host.full_name())));

        Self {
            host_type: Some(host),
            name,
            preferred_namespace,
            type_arguments: None,
            schema_context: Arc::clone(schema_context),
            invoker,
            lookup: schema_context.default_lookup(),
            cache: TypeCache::default(),
        }
    }

    /// Node with no host type, identified by namespace, name and type arguments.
    ///
    /// An empty argument list is stored as `None`.
    pub fn unknown(
        namespace: &str,
        name: &str,
        type_arguments: Option<Vec<Arc<XamlType>>>,
        schema_context: &Arc<SchemaContext>,
    ) -> Self {
        let type_arguments = type_arguments.filter(|args| !args.is_empty());

        Self {
            host_type: None,
            name: name.to_string(),
            preferred_namespace: namespace.to_string(),
            type_arguments,
            schema_context: Arc::clone(schema_context),
            invoker: Arc::new(XamlTypeInvoker::new(name)),
            lookup: schema_context.default_lookup(),
            cache: TypeCache::default(),
        }
    }

    /// Unknown node in the empty namespace.
    pub fn with_name(
        name: &str,
        type_arguments: Option<Vec<Arc<XamlType>>>,
        schema_context: &Arc<SchemaContext>,
    ) -> Self {
        Self::unknown("", name, type_arguments, schema_context)
    }

    /// Replace the lookup strategy of a freshly built node.
    #[must_use]
    pub fn with_lookup(mut self, lookup: Arc<dyn TypeLookup>) -> Self {
        self.lookup = lookup;
        self.cache = TypeCache::default();
        self
    }

    // ---------------------------------------------------------------------
    // Identity
    // ---------------------------------------------------------------------

    /// Host type given at construction (identity field).
    pub fn host_type(&self) -> Option<&HostType> {
        self.host_type.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn preferred_namespace(&self) -> &str {
        &self.preferred_namespace
    }

    pub fn type_arguments(&self) -> Option<&[Arc<XamlType>]> {
        self.type_arguments.as_deref()
    }

    pub fn schema_context(&self) -> &Arc<SchemaContext> {
        &self.schema_context
    }

    /// Strategy resolving this node's derived metadata.
    pub fn lookup(&self) -> &Arc<dyn TypeLookup> {
        &self.lookup
    }

    /// Memo slots backing the default lookups.
    pub fn cache(&self) -> &TypeCache {
        &self.cache
    }

    /// Invoker supplied at construction (or the default bound one).
    pub fn declared_invoker(&self) -> &Arc<XamlTypeInvoker> {
        &self.invoker
    }

    /// Compare with a possibly absent node; absent is never equal.
    pub fn equals_opt(&self, other: Option<&XamlType>) -> bool {
        other.is_some_and(|other| self == other)
    }

    // ---------------------------------------------------------------------
    // Direct host queries
    // ---------------------------------------------------------------------

    pub fn is_array(&self) -> bool {
        self.underlying_type().is_some_and(|host| host.is_array())
    }

    pub fn is_generic(&self) -> bool {
        self.underlying_type().is_some_and(|host| host.is_generic())
    }

    pub fn is_name_valid(&self) -> bool {
        language::is_valid_xaml_name(&self.name)
    }

    // ---------------------------------------------------------------------
    // Derived metadata (dispatched through the lookup strategy)
    // ---------------------------------------------------------------------

    pub fn underlying_type(&self) -> Option<HostType> {
        self.lookup.lookup_underlying_type(self)
    }

    pub fn invoker(&self) -> Arc<XamlTypeInvoker> {
        self.lookup.lookup_invoker(self)
    }

    pub fn base_type(&self) -> Option<Arc<XamlType>> {
        self.lookup.lookup_base_type(self)
    }

    pub fn construction_requires_arguments(&self) -> bool {
        self.lookup.lookup_construction_requires_arguments(self)
    }

    pub fn is_constructible(&self) -> bool {
        self.lookup.lookup_is_constructible(self)
    }

    pub fn is_markup_extension(&self) -> bool {
        self.lookup.lookup_is_markup_extension(self)
    }

    pub fn is_name_scope(&self) -> bool {
        self.lookup.lookup_is_name_scope(self)
    }

    pub fn is_nullable(&self) -> bool {
        self.lookup.lookup_is_nullable(self)
    }

    pub fn is_public(&self) -> bool {
        self.lookup.lookup_is_public(self)
    }

    pub fn is_unknown(&self) -> bool {
        self.lookup.lookup_is_unknown(self)
    }

    pub fn is_ambient(&self) -> bool {
        self.lookup.lookup_is_ambient(self)
    }

    pub fn is_usable_during_initialization(&self) -> bool {
        self.lookup.lookup_usable_during_initialization(self)
    }

    pub fn is_whitespace_significant_collection(&self) -> bool {
        self.lookup.lookup_is_whitespace_significant_collection(self)
    }

    pub fn trim_surrounding_whitespace(&self) -> bool {
        self.lookup.lookup_trim_surrounding_whitespace(self)
    }

    pub fn is_x_data(&self) -> bool {
        self.lookup.lookup_is_x_data(self)
    }

    pub fn is_collection(&self) -> bool {
        self.lookup.lookup_is_collection(self)
    }

    pub fn is_dictionary(&self) -> bool {
        self.lookup.lookup_is_dictionary(self)
    }

    pub fn item_type(&self) -> Option<Arc<XamlType>> {
        self.lookup.lookup_item_type(self)
    }

    pub fn key_type(&self) -> Option<Arc<XamlType>> {
        self.lookup.lookup_key_type(self)
    }

    pub fn markup_extension_return_type(&self) -> Option<Arc<XamlType>> {
        self.lookup.lookup_markup_extension_return_type(self)
    }

    pub fn content_property(&self) -> Option<Arc<XamlMember>> {
        self.lookup.lookup_content_property(self)
    }

    /// Writable property or event named `name`.
    pub fn get_member(&self, name: &str) -> Option<Arc<XamlMember>> {
        self.lookup.lookup_member(self, name, false)
    }

    pub fn get_attachable_member(&self, name: &str) -> Result<Option<Arc<XamlMember>>> {
        self.lookup.lookup_attachable_member(self, name)
    }

    /// Owned copy of every member.
    pub fn get_all_members(&self) -> Result<Vec<Arc<XamlMember>>> {
        self.lookup.lookup_all_members(self)
    }

    /// Owned copy of every attachable member.
    pub fn get_all_attachable_members(&self) -> Result<Vec<Arc<XamlMember>>> {
        self.lookup.lookup_all_attachable_members(self)
    }

    pub fn get_aliased_property(&self, directive: &str) -> Result<Option<Arc<XamlMember>>> {
        self.lookup.lookup_aliased_property(self, directive)
    }

    pub fn get_positional_parameters(&self, parameter_count: usize) -> Result<Vec<Arc<XamlType>>> {
        self.lookup.lookup_positional_parameters(self, parameter_count)
    }

    pub fn allowed_content_types(&self) -> Result<Vec<Arc<XamlType>>> {
        self.lookup.lookup_allowed_content_types(self)
    }

    pub fn content_wrappers(&self) -> Result<Vec<Arc<XamlType>>> {
        self.lookup.lookup_content_wrappers(self)
    }

    pub fn collection_kind(&self) -> Result<CollectionKind> {
        self.lookup.lookup_collection_kind(self)
    }

    pub fn custom_attribute_provider(&self) -> Result<Option<HostType>> {
        self.lookup.lookup_custom_attribute_provider(self)
    }

    pub fn type_converter(&self) -> Result<Option<XamlValueConverter>> {
        self.lookup.lookup_type_converter(self)
    }

    pub fn value_serializer(&self) -> Result<Option<XamlValueConverter>> {
        self.lookup.lookup_value_serializer(self)
    }

    pub fn deferring_loader(&self) -> Result<Option<XamlValueConverter>> {
        self.lookup.lookup_deferring_loader(self)
    }

    pub fn get_xaml_namespaces(&self) -> Result<Vec<String>> {
        self.lookup.lookup_xaml_namespaces(self)
    }

    pub fn can_assign_to(&self, target: &XamlType) -> Result<bool> {
        self.lookup.lookup_can_assign_to(self, target)
    }

    pub fn set_markup_extension_handler(&self) -> Result<Option<SetMarkupExtensionHandler>> {
        self.lookup.lookup_set_markup_extension_handler(self)
    }

    pub fn set_type_converter_handler(&self) -> Result<Option<SetTypeConverterHandler>> {
        self.lookup.lookup_set_type_converter_handler(self)
    }
}

fn preferred_namespace_of(host: &HostType, ctx: &SchemaContext) -> String {
    let settings = ctx.settings();
    if host.type_code() != TypeCode::Object || host == ctx.object_type() {
        return settings.schema_namespace.clone();
    }

    let in_library = host.implements(Capability::MarkupExtension)
        && host.assembly() == settings.library_assembly;
    if settings.is_predefined(&host.full_name()) || in_library {
        settings.schema_namespace.clone()
    } else {
        language::clr_namespace_uri(host.namespace().unwrap_or_default(), host.assembly())
    }
}

fn same_type_arguments(a: Option<&[Arc<XamlType>]>, b: Option<&[Arc<XamlType>]>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            if a.len() != b.len() {
                return false;
            }
            a.iter().zip(b).all(|(x, y)| x == y)
        }
        _ => false,
    }
}

impl PartialEq for XamlType {
    fn eq(&self, other: &Self) -> bool {
        self.host_type == other.host_type
            && self.name == other.name
            && self.preferred_namespace == other.preferred_namespace
            && same_type_arguments(self.type_arguments(), other.type_arguments())
    }
}

impl Eq for XamlType {}

impl Hash for XamlType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if let Some(host) = &self.host_type {
            host.hash(state);
            return;
        }
        self.name.hash(state);
        self.preferred_namespace.hash(state);
        if let Some(args) = &self.type_arguments {
            for arg in args {
                arg.hash(state);
            }
        }
    }
}

impl fmt::Display for XamlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.host_type {
            Some(host) => write!(f, "{}", host),
            None => f.write_str(&self.name),
        }
    }
}

impl fmt::Debug for XamlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XamlType")
            .field("name", &self.name)
            .field("preferred_namespace", &self.preferred_namespace)
            .field("host_type", &self.host_type)
            .field("type_arguments", &self.type_arguments)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
