// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Host type descriptors.
//!
//! Type nodes never inspect a runtime type directly. Everything they need is
//! asked through the narrow [`HostTypeDescriptor`] capability interface, which
//! answers with typed records ([`Marker`], [`Capability`], [`PropertyInfo`],
//! ...) instead of untyped reflective attribute objects.
//!
//! # Features
//!
//! - **HostTypeDescriptor**: capability queries over one runtime type
//! - **HostType**: cheap, clonable handle with reference identity
//! - **RuntimeType**: in-memory descriptor with a fluent builder
//! - **HostTypeRegistry**: concurrent registry seeded with the core library
//!
//! # Example
//!
//! ```rust
//! use xaml_schema::host::{HostTypeDescriptor, HostTypeRegistry, RuntimeTypeBuilder};
//!
//! let registry = HostTypeRegistry::with_core_library();
//! let object = registry.get("System.Object").unwrap();
//!
//! let widget = registry.register(
//!     RuntimeTypeBuilder::class("Acme.Widgets", "Widget", "Acme")
//!         .base(&object)
//!         .default_constructor()
//!         .build(),
//! );
//! assert_eq!(widget.full_name(), "Acme.Widgets.Widget");
//! assert_eq!(widget.base_type(), Some(object));
//! ```

mod records;
mod registry;
mod runtime_type;

pub use records::{
    Capability, ConstructorInfo, EventInfo, Marker, MarkerKind, MethodBody, MethodInfo,
    MethodSignature, PropertyInfo, TypeCode, Visibility,
};
pub use registry::HostTypeRegistry;
pub use runtime_type::{RuntimeType, RuntimeTypeBuilder};

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// Capability queries over one runtime type.
///
/// Lookups that consult the inheritance chain (capabilities, markers,
/// properties, events) include members inherited from base types; static
/// method lookup only covers the type itself.
pub trait HostTypeDescriptor: fmt::Debug + Send + Sync {
    /// Simple name, including any generic arity suffix (`List`1`).
    fn name(&self) -> &str;

    /// Declaring namespace, if any.
    fn namespace(&self) -> Option<&str>;

    /// Name of the assembly defining the type.
    fn assembly(&self) -> &str;

    /// Namespace-qualified name.
    fn full_name(&self) -> String {
        match self.namespace() {
            Some(ns) if !ns.is_empty() => format!("{}.{}", ns, self.name()),
            _ => self.name().to_string(),
        }
    }

    fn type_code(&self) -> TypeCode;

    fn visibility(&self) -> Visibility;

    fn is_abstract(&self) -> bool;

    fn is_value_type(&self) -> bool;

    /// Element type when this is an array type.
    fn element_type(&self) -> Option<HostType>;

    fn is_array(&self) -> bool {
        self.element_type().is_some()
    }

    /// Generic arguments of a constructed generic type, in declaration order.
    fn generic_arguments(&self) -> &[HostType];

    fn is_generic(&self) -> bool {
        !self.generic_arguments().is_empty()
    }

    fn base_type(&self) -> Option<HostType>;

    /// Whether the type (or one of its bases) implements `capability`.
    fn implements(&self, capability: Capability) -> bool;

    /// First marker of the given kind declared on the type or inherited.
    fn marker(&self, kind: MarkerKind) -> Option<&Marker>;

    /// Constructors declared by the type itself.
    fn constructors(&self) -> &[ConstructorInfo];

    fn property(&self, name: &str) -> Option<&PropertyInfo>;

    fn event(&self, name: &str) -> Option<&EventInfo>;

    /// Every property visible on the type, most-derived first.
    fn properties(&self) -> Vec<&PropertyInfo>;

    /// Every event visible on the type, most-derived first.
    fn events(&self) -> Vec<&EventInfo>;

    /// Static method declared by the type with the given name and shape.
    fn static_method(&self, name: &str, signature: MethodSignature) -> Option<&MethodInfo>;
}

/// Shared handle to a host type descriptor.
///
/// Two handles are equal only when they point at the same descriptor, the
/// same way runtime type objects compare by reference. Hashing follows the
/// same identity so a node can delegate its hash to its host type.
#[derive(Clone)]
pub struct HostType(Arc<dyn HostTypeDescriptor>);

impl HostType {
    /// Wrap a descriptor into a new handle with its own identity.
    pub fn new<D: HostTypeDescriptor + 'static>(descriptor: D) -> Self {
        Self(Arc::new(descriptor))
    }

    /// Wrap an already shared descriptor.
    pub fn from_arc(descriptor: Arc<dyn HostTypeDescriptor>) -> Self {
        Self(descriptor)
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.0).cast::<()>()
    }
}

impl Deref for HostType {
    type Target = dyn HostTypeDescriptor;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for HostType {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for HostType {}

impl Hash for HostType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.addr() as usize).hash(state);
    }
}

impl fmt::Debug for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostType({})", self.full_name())
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}
