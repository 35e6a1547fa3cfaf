// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Value converter references returned by type-node lookups.
//!
//! The default lookups never produce these; a schema provider overriding
//! `lookup_type_converter`, `lookup_value_serializer` or
//! `lookup_deferring_loader` does.

use crate::host::{HostType, HostTypeDescriptor};
use std::fmt;

/// Conversion facility a [`XamlValueConverter`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueConverterKind {
    TypeConverter,
    ValueSerializer,
    DeferringLoader,
}

/// Reference to a converter implementation for one target type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XamlValueConverter {
    kind: ValueConverterKind,
    converter_type: Option<HostType>,
    target_type: Option<String>,
}

impl XamlValueConverter {
    pub fn new(
        kind: ValueConverterKind,
        converter_type: Option<HostType>,
        target_type: Option<String>,
    ) -> Self {
        Self {
            kind,
            converter_type,
            target_type,
        }
    }

    pub fn kind(&self) -> ValueConverterKind {
        self.kind
    }

    /// Host type implementing the conversion, if any.
    pub fn converter_type(&self) -> Option<&HostType> {
        self.converter_type.as_ref()
    }

    /// Display name of the type being converted.
    pub fn target_type(&self) -> Option<&str> {
        self.target_type.as_deref()
    }

    /// Converter name: the converter host type's simple name, else "Unknown".
    pub fn name(&self) -> &str {
        self.converter_type
            .as_ref()
            .map_or("Unknown", |ty| ty.name())
    }
}

impl fmt::Display for XamlValueConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target_type {
            Some(target) => write!(f, "{}({})", self.name(), target),
            None => f.write_str(self.name()),
        }
    }
}
