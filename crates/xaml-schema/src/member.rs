// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Member descriptors produced by type-node member lookups.

use crate::host::{EventInfo, HostType, HostTypeDescriptor, PropertyInfo};
use std::fmt;

/// What kind of host member backs a [`XamlMember`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberKind {
    Property { can_write: bool },
    Event,
}

/// A property or event of a schema type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XamlMember {
    name: String,
    declaring_type: String,
    kind: MemberKind,
    value_type: Option<HostType>,
}

impl XamlMember {
    /// Member backed by a host property.
    pub fn from_property(property: &PropertyInfo, declaring_type: &HostType) -> Self {
        Self {
            name: property.name.clone(),
            declaring_type: declaring_type.full_name(),
            kind: MemberKind::Property {
                can_write: property.can_write,
            },
            value_type: Some(property.property_type.clone()),
        }
    }

    /// Member backed by a host event.
    pub fn from_event(event: &EventInfo, declaring_type: &HostType) -> Self {
        Self {
            name: event.name.clone(),
            declaring_type: declaring_type.full_name(),
            kind: MemberKind::Event,
            value_type: event.handler_type.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full name of the type the member was looked up on.
    pub fn declaring_type(&self) -> &str {
        &self.declaring_type
    }

    pub fn kind(&self) -> &MemberKind {
        &self.kind
    }

    pub fn is_event(&self) -> bool {
        matches!(self.kind, MemberKind::Event)
    }

    /// A property without a setter.
    pub fn is_read_only(&self) -> bool {
        matches!(self.kind, MemberKind::Property { can_write: false })
    }

    /// Property type, or handler type for events.
    pub fn value_type(&self) -> Option<&HostType> {
        self.value_type.as_ref()
    }
}

impl fmt::Display for XamlMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.declaring_type, self.name)
    }
}
