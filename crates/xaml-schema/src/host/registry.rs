// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Concurrent registry of host types keyed by full name.

use super::{
    Capability, ConstructorInfo, HostType, HostTypeDescriptor, Marker, RuntimeTypeBuilder,
    TypeCode,
};
use crate::error::{Result, SchemaError};
use dashmap::DashMap;

const CORE_ASSEMBLY: &str = "mscorlib";
const SYSTEM_ASSEMBLY: &str = "System";
const XAML_ASSEMBLY: &str = "System.Xaml";
const MARKUP_NAMESPACE: &str = "System.Windows.Markup";

/// Registry resolving full names to [`HostType`] handles.
///
/// Registration is first-wins: registering a second descriptor under a name
/// already taken returns the existing handle, so every caller observes one
/// identity per full name.
#[derive(Debug, Default)]
pub struct HostTypeRegistry {
    types: DashMap<String, HostType>,
}

impl HostTypeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the core library types.
    ///
    /// Seeds `System.Object`, `System.ValueType`, `System.Array`, the common
    /// primitives, `System.TimeSpan`, `System.Uri`, `System.Xaml.XamlType` and
    /// the markup built-ins (`MarkupExtension`, `XData`, `Reference`,
    /// `MemberDefinition`, `PropertyDefinition`).
    #[must_use]
    pub fn with_core_library() -> Self {
        let registry = Self::new();
        registry.seed_core_library();
        registry
    }

    /// Register a host type, returning the handle now bound to its full name.
    pub fn register(&self, ty: HostType) -> HostType {
        let name = ty.full_name();
        self.types.entry(name).or_insert(ty).value().clone()
    }

    /// Resolve a full name.
    pub fn get(&self, full_name: &str) -> Option<HostType> {
        self.types.get(full_name).map(|entry| entry.value().clone())
    }

    /// Resolve a full name, failing when it is not registered.
    pub fn require(&self, full_name: &str) -> Result<HostType> {
        self.get(full_name)
            .ok_or_else(|| SchemaError::UnknownHostType(full_name.to_string()))
    }

    /// Register (or reuse) the array type over `element`.
    pub fn array_of(&self, element: &HostType) -> Result<HostType> {
        let name = format!("{}[]", element.full_name());
        if let Some(existing) = self.get(&name) {
            return Ok(existing);
        }
        let array_base = self.require("System.Array")?;
        Ok(self.register(RuntimeTypeBuilder::array_of(element, &array_base).build()))
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn seed_core_library(&self) {
        let object = self.register(
            RuntimeTypeBuilder::class("System", "Object", CORE_ASSEMBLY)
                .default_constructor()
                .build(),
        );
        let value_type = self.register(
            RuntimeTypeBuilder::class("System", "ValueType", CORE_ASSEMBLY)
                .abstract_type()
                .base(&object)
                .build(),
        );
        self.register(
            RuntimeTypeBuilder::class("System", "Array", CORE_ASSEMBLY)
                .abstract_type()
                .base(&object)
                .implements(Capability::Collection)
                .build(),
        );
        let string = self.register(
            RuntimeTypeBuilder::class("System", "String", CORE_ASSEMBLY)
                .type_code(TypeCode::String)
                .base(&object)
                .constructor(ConstructorInfo::public(1))
                .build(),
        );

        // Value types expose no parameterless constructor through reflection.
        for (name, code) in [
            ("Boolean", TypeCode::Boolean),
            ("Char", TypeCode::Char),
            ("Byte", TypeCode::Byte),
            ("Int16", TypeCode::Int16),
            ("Int32", TypeCode::Int32),
            ("Int64", TypeCode::Int64),
            ("Single", TypeCode::Single),
            ("Double", TypeCode::Double),
            ("Decimal", TypeCode::Decimal),
            ("DateTime", TypeCode::DateTime),
        ] {
            self.register(
                RuntimeTypeBuilder::value_type("System", name, CORE_ASSEMBLY)
                    .type_code(code)
                    .base(&value_type)
                    .build(),
            );
        }
        self.register(
            RuntimeTypeBuilder::value_type("System", "TimeSpan", CORE_ASSEMBLY)
                .base(&value_type)
                .constructor(ConstructorInfo::public(1))
                .constructor(ConstructorInfo::public(3))
                .build(),
        );
        self.register(
            RuntimeTypeBuilder::class("System", "Uri", SYSTEM_ASSEMBLY)
                .base(&object)
                .constructor(ConstructorInfo::public(1))
                .constructor(ConstructorInfo::public(2))
                .build(),
        );
        self.register(
            RuntimeTypeBuilder::class("System.Xaml", "XamlType", XAML_ASSEMBLY)
                .base(&object)
                .constructor(ConstructorInfo::public(2))
                .constructor(ConstructorInfo::public(3))
                .constructor(ConstructorInfo::public(4))
                .property("Name", &string, false)
                .build(),
        );

        let markup_extension = self.register(
            RuntimeTypeBuilder::class(MARKUP_NAMESPACE, "MarkupExtension", XAML_ASSEMBLY)
                .abstract_type()
                .base(&object)
                .implements(Capability::MarkupExtension)
                .constructor(ConstructorInfo::non_public(0))
                .build(),
        );
        self.register(
            RuntimeTypeBuilder::class(MARKUP_NAMESPACE, "Reference", XAML_ASSEMBLY)
                .base(&markup_extension)
                .default_constructor()
                .constructor(ConstructorInfo::public(1))
                .marker(Marker::ContentProperty {
                    name: Some("Name".to_string()),
                })
                .marker(Marker::MarkupExtensionReturnType {
                    return_type: object.clone(),
                })
                .property("Name", &string, true)
                .build(),
        );
        self.register(
            RuntimeTypeBuilder::class(MARKUP_NAMESPACE, "XData", XAML_ASSEMBLY)
                .base(&object)
                .default_constructor()
                .marker(Marker::ContentProperty {
                    name: Some("Text".to_string()),
                })
                .property("Text", &string, true)
                .build(),
        );
        let member_definition = self.register(
            RuntimeTypeBuilder::class(MARKUP_NAMESPACE, "MemberDefinition", XAML_ASSEMBLY)
                .abstract_type()
                .base(&object)
                .constructor(ConstructorInfo::non_public(0))
                .property("Name", &string, true)
                .build(),
        );
        self.register(
            RuntimeTypeBuilder::class(MARKUP_NAMESPACE, "PropertyDefinition", XAML_ASSEMBLY)
                .base(&member_definition)
                .default_constructor()
                .build(),
        );

        log::debug!(
            "[HostTypeRegistry::seed_core_library] registered {} core types",
            self.len()
        );
    }
}
