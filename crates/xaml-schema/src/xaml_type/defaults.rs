// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Reflection-derived default algorithms.
//!
//! These functions compute; they do not cache. [`super::TypeLookup`]'s
//! provided methods wrap them with the node's memo slots, and an overriding
//! lookup can call them to fall back on the default answer.
//!
//! Dependencies between facts go back through the node's public accessors,
//! so overriding one lookup changes every fact derived from it. Nodes
//! without a host type get a conservative answer and never touch a host.

use super::XamlType;
use crate::host::{Capability, HostTypeDescriptor, Marker, MarkerKind, TypeCode};
use crate::member::XamlMember;
use std::sync::Arc;

pub use super::binding::{set_markup_extension_handler, set_type_converter_handler};

/// Host base type as a node; the object type ends the chain.
///
/// A node without a host type derives from the object type, sharing this
/// node's context and invoker.
pub fn base_type(ty: &XamlType) -> Option<XamlType> {
    let ctx = ty.schema_context();
    let object = ctx.object_type();
    match ty.underlying_type() {
        None => Some(XamlType::with_invoker(object.clone(), ctx, Some(ty.invoker()))),
        Some(host) => {
            let base = host.base_type()?;
            if &base == object {
                return None;
            }
            log::trace!("[defaults::base_type] {} -> {}", ty, base);
            Some(XamlType::with_invoker(base, ctx, Some(ty.invoker())))
        }
    }
}

pub fn construction_requires_arguments(ty: &XamlType) -> bool {
    let Some(host) = ty.underlying_type() else {
        return false;
    };

    // Abstract definition types (e.g. MemberDefinition) report true.
    if host.is_abstract() {
        return true;
    }

    match host.type_code() {
        TypeCode::String => return true,
        TypeCode::Object => {
            if ty.schema_context().time_span_type() == Some(&host) {
                return false;
            }
        }
        _ => return false,
    }

    !host
        .constructors()
        .iter()
        .any(|ctor| !ctor.is_static && ctor.parameter_count == 0)
}

pub fn is_constructible(ty: &XamlType) -> bool {
    if ty.is_array() {
        return false;
    }
    if let Some(host) = ty.underlying_type() {
        if ty.schema_context().type_node_type() == Some(&host) {
            return false;
        }
    }
    if ty.is_markup_extension() {
        return false;
    }
    !ty.construction_requires_arguments()
}

pub fn is_markup_extension(ty: &XamlType) -> bool {
    implements(ty, Capability::MarkupExtension)
}

pub fn is_name_scope(ty: &XamlType) -> bool {
    implements(ty, Capability::NameScope)
}

pub fn is_nullable(ty: &XamlType) -> bool {
    ty.underlying_type()
        .map_or(true, |host| {
            !host.is_value_type() || host.implements(Capability::NullableWrapper)
        })
}

pub fn is_public(ty: &XamlType) -> bool {
    ty.underlying_type()
        .map_or(true, |host| host.visibility().is_public())
}

pub fn is_unknown(ty: &XamlType) -> bool {
    ty.underlying_type().is_none()
}

pub fn is_ambient(ty: &XamlType) -> bool {
    has_marker(ty, MarkerKind::Ambient)
}

pub fn usable_during_initialization(ty: &XamlType) -> bool {
    ty.underlying_type().is_some_and(|host| {
        matches!(
            host.marker(MarkerKind::UsableDuringInitialization),
            Some(Marker::UsableDuringInitialization { usable: true })
        )
    })
}

pub fn is_whitespace_significant_collection(ty: &XamlType) -> bool {
    ty.is_unknown() || has_marker(ty, MarkerKind::WhitespaceSignificantCollection)
}

pub fn trim_surrounding_whitespace(ty: &XamlType) -> bool {
    has_marker(ty, MarkerKind::TrimSurroundingWhitespace)
}

/// Always false, matching the reference behaviour where even the XData
/// type itself reports false.
pub fn is_x_data(_ty: &XamlType) -> bool {
    false
}

/// Arrays are not collections here; they are handled through `item_type`.
pub fn is_collection(ty: &XamlType) -> bool {
    ty.underlying_type().is_some_and(|host| {
        !host.is_array()
            && (host.implements(Capability::Collection)
                || host.implements(Capability::GenericCollection))
    })
}

pub fn is_dictionary(ty: &XamlType) -> bool {
    ty.underlying_type().is_some_and(|host| {
        host.implements(Capability::Dictionary) || host.implements(Capability::GenericDictionary)
    })
}

pub fn item_type(ty: &XamlType) -> Option<XamlType> {
    let host = ty.underlying_type()?;
    let ctx = ty.schema_context();
    if let Some(element) = host.element_type() {
        return Some(XamlType::new(element, ctx));
    }
    if !ty.is_collection() {
        return None;
    }
    Some(first_generic_argument_or_object(ty))
}

pub fn key_type(ty: &XamlType) -> Option<XamlType> {
    if !ty.is_dictionary() {
        return None;
    }
    Some(first_generic_argument_or_object(ty))
}

pub fn markup_extension_return_type(ty: &XamlType) -> Option<XamlType> {
    let host = ty.underlying_type()?;
    match host.marker(MarkerKind::MarkupExtensionReturnType) {
        Some(Marker::MarkupExtensionReturnType { return_type }) => {
            Some(XamlType::new(return_type.clone(), ty.schema_context()))
        }
        _ => None,
    }
}

/// Member named by the content-property marker; writability is not required.
pub fn content_property(ty: &XamlType) -> Option<Arc<XamlMember>> {
    let host = ty.underlying_type()?;
    match host.marker(MarkerKind::ContentProperty) {
        Some(Marker::ContentProperty { name: Some(name) }) => {
            ty.lookup().lookup_member(ty, name, true)
        }
        _ => None,
    }
}

/// Property (writable unless `skip_read_only_check`) or event named `name`.
pub fn member(ty: &XamlType, name: &str, skip_read_only_check: bool) -> Option<XamlMember> {
    let host = ty.underlying_type()?;
    if let Some(property) = host.property(name) {
        if skip_read_only_check || property.can_write {
            return Some(XamlMember::from_property(property, &host));
        }
    }
    host.event(name)
        .map(|event| XamlMember::from_event(event, &host))
}

fn implements(ty: &XamlType, capability: Capability) -> bool {
    ty.underlying_type()
        .is_some_and(|host| host.implements(capability))
}

fn has_marker(ty: &XamlType, kind: MarkerKind) -> bool {
    ty.underlying_type()
        .is_some_and(|host| host.marker(kind).is_some())
}

fn first_generic_argument_or_object(ty: &XamlType) -> XamlType {
    let ctx = ty.schema_context();
    let argument = if ty.is_generic() {
        ty.underlying_type()
            .and_then(|host| host.generic_arguments().first().cloned())
    } else {
        None
    };
    XamlType::new(argument.unwrap_or_else(|| ctx.object_type().clone()), ctx)
}
