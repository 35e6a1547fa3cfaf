// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Typed records returned by host type queries.

use super::HostType;
use crate::handler::{MarkupExtensionHandlerFn, TypeConverterHandlerFn};
use std::fmt;

/// Primitive classification of a host type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCode {
    Empty,
    Object,
    DbNull,
    Boolean,
    Char,
    SByte,
    Byte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Single,
    Double,
    Decimal,
    DateTime,
    String,
}

/// Declared visibility of a host type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Top-level public type.
    Public,
    /// Public type nested in another type.
    NestedPublic,
    /// Top-level type visible only inside its assembly.
    NotPublic,
    /// Nested type with any non-public accessibility.
    NestedNonPublic,
}

impl Visibility {
    /// Visible from outside the declaring assembly.
    pub fn is_public(self) -> bool {
        matches!(self, Self::Public | Self::NestedPublic)
    }
}

/// Behavioural contracts a host type can implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Non-generic single-element collection.
    Collection,
    /// Generic single-element collection over the first generic argument.
    GenericCollection,
    /// Non-generic key/value collection.
    Dictionary,
    /// Generic key/value collection keyed by the first generic argument.
    GenericDictionary,
    /// Nullable wrapper over a value type.
    NullableWrapper,
    /// Produces values through markup-extension evaluation.
    MarkupExtension,
    /// Owns a name scope.
    NameScope,
}

/// Discriminant of a [`Marker`], used to query one marker kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    ContentProperty,
    Ambient,
    WhitespaceSignificantCollection,
    TrimSurroundingWhitespace,
    UsableDuringInitialization,
    MarkupExtensionReturnType,
    SetMarkupExtensionHandler,
    SetTypeConverterHandler,
}

/// Declared opt-in behaviour attached to a host type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// Names the member receiving element content.
    ContentProperty { name: Option<String> },
    /// Values of this type are visible to nested elements.
    Ambient,
    /// Whitespace inside this collection is preserved.
    WhitespaceSignificantCollection,
    /// Whitespace around instances of this type is trimmed.
    TrimSurroundingWhitespace,
    /// Instances may be used before initialization completes.
    UsableDuringInitialization { usable: bool },
    /// Type produced by a markup extension.
    MarkupExtensionReturnType { return_type: HostType },
    /// Static method handling markup-extension assignment.
    SetMarkupExtensionHandler { method: String },
    /// Static method handling type-converter assignment.
    SetTypeConverterHandler { method: String },
}

impl Marker {
    /// Kind of this marker.
    pub fn kind(&self) -> MarkerKind {
        match self {
            Self::ContentProperty { .. } => MarkerKind::ContentProperty,
            Self::Ambient => MarkerKind::Ambient,
            Self::WhitespaceSignificantCollection => MarkerKind::WhitespaceSignificantCollection,
            Self::TrimSurroundingWhitespace => MarkerKind::TrimSurroundingWhitespace,
            Self::UsableDuringInitialization { .. } => MarkerKind::UsableDuringInitialization,
            Self::MarkupExtensionReturnType { .. } => MarkerKind::MarkupExtensionReturnType,
            Self::SetMarkupExtensionHandler { .. } => MarkerKind::SetMarkupExtensionHandler,
            Self::SetTypeConverterHandler { .. } => MarkerKind::SetTypeConverterHandler,
        }
    }
}

/// Instance or static constructor exposed by a host type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstructorInfo {
    pub parameter_count: usize,
    pub is_public: bool,
    pub is_static: bool,
}

impl ConstructorInfo {
    /// Public instance constructor with `parameter_count` parameters.
    pub fn public(parameter_count: usize) -> Self {
        Self {
            parameter_count,
            is_public: true,
            is_static: false,
        }
    }

    /// Non-public instance constructor with `parameter_count` parameters.
    pub fn non_public(parameter_count: usize) -> Self {
        Self {
            parameter_count,
            is_public: false,
            is_static: false,
        }
    }

    /// Type initializer.
    pub fn type_initializer() -> Self {
        Self {
            parameter_count: 0,
            is_public: false,
            is_static: true,
        }
    }
}

/// Property exposed by a host type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
    pub name: String,
    pub property_type: HostType,
    pub can_write: bool,
}

/// Event exposed by a host type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventInfo {
    pub name: String,
    pub handler_type: Option<HostType>,
}

/// Shape of a static method, used to match handler declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodSignature {
    /// `(object sender, SetMarkupExtensionArgs args)`
    SetMarkupExtensionHandler,
    /// `(object sender, SetTypeConverterArgs args)`
    SetTypeConverterHandler,
    /// Any other shape.
    Other { parameter_count: usize },
}

/// Body of a host method, as far as this crate can call it.
#[derive(Clone)]
pub enum MethodBody {
    SetMarkupExtension(MarkupExtensionHandlerFn),
    SetTypeConverter(TypeConverterHandlerFn),
    Opaque { parameter_count: usize },
}

impl fmt::Debug for MethodBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetMarkupExtension(_) => f.write_str("SetMarkupExtension(..)"),
            Self::SetTypeConverter(_) => f.write_str("SetTypeConverter(..)"),
            Self::Opaque { parameter_count } => {
                write!(f, "Opaque {{ parameter_count: {} }}", parameter_count)
            }
        }
    }
}

/// Method exposed by a host type.
#[derive(Debug, Clone)]
pub struct MethodInfo {
    pub name: String,
    pub is_static: bool,
    pub body: MethodBody,
}

impl MethodInfo {
    /// Static markup-extension handler method.
    pub fn markup_extension_handler(
        name: impl Into<String>,
        body: MarkupExtensionHandlerFn,
    ) -> Self {
        Self {
            name: name.into(),
            is_static: true,
            body: MethodBody::SetMarkupExtension(body),
        }
    }

    /// Static type-converter handler method.
    pub fn type_converter_handler(name: impl Into<String>, body: TypeConverterHandlerFn) -> Self {
        Self {
            name: name.into(),
            is_static: true,
            body: MethodBody::SetTypeConverter(body),
        }
    }

    /// Method whose body is not callable through this crate.
    pub fn opaque(name: impl Into<String>, is_static: bool, parameter_count: usize) -> Self {
        Self {
            name: name.into(),
            is_static,
            body: MethodBody::Opaque { parameter_count },
        }
    }

    pub fn signature(&self) -> MethodSignature {
        match &self.body {
            MethodBody::SetMarkupExtension(_) => MethodSignature::SetMarkupExtensionHandler,
            MethodBody::SetTypeConverter(_) => MethodSignature::SetTypeConverterHandler,
            MethodBody::Opaque { parameter_count } => MethodSignature::Other {
                parameter_count: *parameter_count,
            },
        }
    }
}
