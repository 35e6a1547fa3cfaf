// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Static handlers a host type can declare for markup-extension and
//! type-converter assignment.
//!
//! A host type opts in with a `SetMarkupExtensionHandler` or
//! `SetTypeConverterHandler` marker naming one of its static methods. The
//! type node binds the marker to the method lazily; the bound handler is what
//! a document writer calls before assigning a member value.

use std::fmt;
use std::sync::Arc;

/// Arguments passed to a bound markup-extension handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetMarkupExtensionArgs {
    /// Member being assigned.
    pub member: String,
    /// Full name of the markup extension providing the value.
    pub markup_extension: String,
    /// Set by the handler when it performed the assignment itself.
    pub handled: bool,
}

/// Arguments passed to a bound type-converter handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetTypeConverterArgs {
    /// Member being assigned.
    pub member: String,
    /// Full name of the converter that would otherwise run.
    pub type_converter: String,
    /// Textual value from the document.
    pub value: String,
    /// Set by the handler when it performed the assignment itself.
    pub handled: bool,
}

/// Callable body of a markup-extension handler method.
pub type MarkupExtensionHandlerFn = Arc<dyn Fn(&mut SetMarkupExtensionArgs) + Send + Sync>;

/// Callable body of a type-converter handler method.
pub type TypeConverterHandlerFn = Arc<dyn Fn(&mut SetTypeConverterArgs) + Send + Sync>;

/// Handler bound from a `SetMarkupExtensionHandler` marker.
#[derive(Clone)]
pub struct SetMarkupExtensionHandler {
    method: String,
    body: MarkupExtensionHandlerFn,
}

impl SetMarkupExtensionHandler {
    pub(crate) fn new(method: impl Into<String>, body: MarkupExtensionHandlerFn) -> Self {
        Self {
            method: method.into(),
            body,
        }
    }

    /// Name of the bound static method.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Run the handler.
    pub fn invoke(&self, args: &mut SetMarkupExtensionArgs) {
        (self.body)(args);
    }
}

impl fmt::Debug for SetMarkupExtensionHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetMarkupExtensionHandler")
            .field("method", &self.method)
            .finish_non_exhaustive()
    }
}

/// Handler bound from a `SetTypeConverterHandler` marker.
#[derive(Clone)]
pub struct SetTypeConverterHandler {
    method: String,
    body: TypeConverterHandlerFn,
}

impl SetTypeConverterHandler {
    pub(crate) fn new(method: impl Into<String>, body: TypeConverterHandlerFn) -> Self {
        Self {
            method: method.into(),
            body,
        }
    }

    /// Name of the bound static method.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Run the handler.
    pub fn invoke(&self, args: &mut SetTypeConverterArgs) {
        (self.body)(args);
    }
}

impl fmt::Debug for SetTypeConverterHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetTypeConverterHandler")
            .field("method", &self.method)
            .finish_non_exhaustive()
    }
}
