// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! In-memory host type descriptor and its fluent builder.

use super::{
    Capability, ConstructorInfo, EventInfo, HostType, HostTypeDescriptor, Marker, MarkerKind,
    MethodInfo, MethodSignature, PropertyInfo, TypeCode, Visibility,
};

/// Host type description held entirely in memory.
///
/// Base types are referenced by handle, so a hierarchy is built bottom-up:
/// register the base first, then derive from it.
#[derive(Debug)]
pub struct RuntimeType {
    name: String,
    namespace: Option<String>,
    assembly: String,
    full_name: String,
    type_code: TypeCode,
    visibility: Visibility,
    is_abstract: bool,
    is_value_type: bool,
    element_type: Option<HostType>,
    generic_arguments: Vec<HostType>,
    base_type: Option<HostType>,
    capabilities: Vec<Capability>,
    markers: Vec<Marker>,
    constructors: Vec<ConstructorInfo>,
    properties: Vec<PropertyInfo>,
    events: Vec<EventInfo>,
    methods: Vec<MethodInfo>,
}

impl HostTypeDescriptor for RuntimeType {
    fn name(&self) -> &str {
        &self.name
    }

    fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    fn assembly(&self) -> &str {
        &self.assembly
    }

    fn full_name(&self) -> String {
        self.full_name.clone()
    }

    fn type_code(&self) -> TypeCode {
        self.type_code
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    fn is_value_type(&self) -> bool {
        self.is_value_type
    }

    fn element_type(&self) -> Option<HostType> {
        self.element_type.clone()
    }

    fn generic_arguments(&self) -> &[HostType] {
        &self.generic_arguments
    }

    fn base_type(&self) -> Option<HostType> {
        self.base_type.clone()
    }

    fn implements(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
            || self
                .base_type
                .as_ref()
                .is_some_and(|base| base.implements(capability))
    }

    fn marker(&self, kind: MarkerKind) -> Option<&Marker> {
        self.markers
            .iter()
            .find(|m| m.kind() == kind)
            .or_else(|| self.base_type.as_ref()?.marker(kind))
    }

    fn constructors(&self) -> &[ConstructorInfo] {
        &self.constructors
    }

    fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .or_else(|| self.base_type.as_ref()?.property(name))
    }

    fn event(&self, name: &str) -> Option<&EventInfo> {
        self.events
            .iter()
            .find(|e| e.name == name)
            .or_else(|| self.base_type.as_ref()?.event(name))
    }

    fn properties(&self) -> Vec<&PropertyInfo> {
        let mut all: Vec<&PropertyInfo> = self.properties.iter().collect();
        if let Some(base) = &self.base_type {
            for inherited in base.properties() {
                if !all.iter().any(|p| p.name == inherited.name) {
                    all.push(inherited);
                }
            }
        }
        all
    }

    fn events(&self) -> Vec<&EventInfo> {
        let mut all: Vec<&EventInfo> = self.events.iter().collect();
        if let Some(base) = &self.base_type {
            for inherited in base.events() {
                if !all.iter().any(|e| e.name == inherited.name) {
                    all.push(inherited);
                }
            }
        }
        all
    }

    fn static_method(&self, name: &str, signature: MethodSignature) -> Option<&MethodInfo> {
        self.methods
            .iter()
            .find(|m| m.is_static && m.name == name && m.signature() == signature)
    }
}

/// Builder for [`RuntimeType`] descriptors.
#[derive(Debug)]
pub struct RuntimeTypeBuilder {
    ty: RuntimeType,
}

impl RuntimeTypeBuilder {
    /// Start a public reference type.
    pub fn class(namespace: &str, name: impl Into<String>, assembly: impl Into<String>) -> Self {
        Self {
            ty: RuntimeType {
                name: name.into(),
                namespace: if namespace.is_empty() {
                    None
                } else {
                    Some(namespace.to_string())
                },
                assembly: assembly.into(),
                full_name: String::new(),
                type_code: TypeCode::Object,
                visibility: Visibility::Public,
                is_abstract: false,
                is_value_type: false,
                element_type: None,
                generic_arguments: Vec::new(),
                base_type: None,
                capabilities: Vec::new(),
                markers: Vec::new(),
                constructors: Vec::new(),
                properties: Vec::new(),
                events: Vec::new(),
                methods: Vec::new(),
            },
        }
    }

    /// Start a public value type.
    pub fn value_type(
        namespace: &str,
        name: impl Into<String>,
        assembly: impl Into<String>,
    ) -> Self {
        let mut builder = Self::class(namespace, name, assembly);
        builder.ty.is_value_type = true;
        builder
    }

    /// Start an array type over `element`, deriving from `array_base`.
    ///
    /// Arrays report both collection capabilities, like runtime arrays do.
    pub fn array_of(element: &HostType, array_base: &HostType) -> Self {
        let namespace = element.namespace().unwrap_or_default().to_string();
        let mut builder = Self::class(
            &namespace,
            format!("{}[]", element.name()),
            element.assembly().to_string(),
        );
        builder.ty.element_type = Some(element.clone());
        builder.ty.base_type = Some(array_base.clone());
        builder.ty.visibility = element.visibility();
        builder
            .implements(Capability::Collection)
            .implements(Capability::GenericCollection)
    }

    pub fn type_code(mut self, code: TypeCode) -> Self {
        self.ty.type_code = code;
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.ty.visibility = visibility;
        self
    }

    pub fn abstract_type(mut self) -> Self {
        self.ty.is_abstract = true;
        self
    }

    pub fn base(mut self, base: &HostType) -> Self {
        self.ty.base_type = Some(base.clone());
        self
    }

    /// Append a generic argument (for constructed generic types).
    pub fn generic_argument(mut self, argument: &HostType) -> Self {
        self.ty.generic_arguments.push(argument.clone());
        self
    }

    pub fn implements(mut self, capability: Capability) -> Self {
        if !self.ty.capabilities.contains(&capability) {
            self.ty.capabilities.push(capability);
        }
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.ty.markers.push(marker);
        self
    }

    pub fn constructor(mut self, ctor: ConstructorInfo) -> Self {
        self.ty.constructors.push(ctor);
        self
    }

    /// Add a public parameterless instance constructor.
    pub fn default_constructor(self) -> Self {
        self.constructor(ConstructorInfo::public(0))
    }

    pub fn property(
        mut self,
        name: impl Into<String>,
        property_type: &HostType,
        can_write: bool,
    ) -> Self {
        self.ty.properties.push(PropertyInfo {
            name: name.into(),
            property_type: property_type.clone(),
            can_write,
        });
        self
    }

    pub fn event(mut self, name: impl Into<String>, handler_type: Option<&HostType>) -> Self {
        self.ty.events.push(EventInfo {
            name: name.into(),
            handler_type: handler_type.cloned(),
        });
        self
    }

    pub fn method(mut self, method: MethodInfo) -> Self {
        self.ty.methods.push(method);
        self
    }

    /// Finish the descriptor without wrapping it in a handle.
    pub fn build_descriptor(mut self) -> RuntimeType {
        let mut full_name = match &self.ty.namespace {
            Some(ns) => format!("{}.{}", ns, self.ty.name),
            None => self.ty.name.clone(),
        };
        if !self.ty.generic_arguments.is_empty() {
            let args: Vec<String> = self
                .ty
                .generic_arguments
                .iter()
                .map(|a| format!("[{}]", a.full_name()))
                .collect();
            full_name.push('[');
            full_name.push_str(&args.join(","));
            full_name.push(']');
        }
        self.ty.full_name = full_name;
        self.ty
    }

    /// Finish the descriptor as a new [`HostType`] handle.
    pub fn build(self) -> HostType {
        HostType::new(self.build_descriptor())
    }
}
