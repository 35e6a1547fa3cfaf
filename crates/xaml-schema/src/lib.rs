// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema type nodes for markup object graphs.
//!
//! A markup reader or writer needs to know, for every type it meets, whether
//! it can be constructed, what its base type is, whether it collects items or
//! key/value pairs, which member receives content, and so on. This crate
//! answers those questions lazily from a host type description and memoizes
//! every answer on the node.
//!
//! # Features
//!
//! - **Type nodes**: [`XamlType`] with value identity over host type, name,
//!   namespace and type arguments, usable as a hash key
//! - **Lazy metadata**: every derived fact is computed once, on first request
//! - **Overridable lookups**: a [`TypeLookup`] strategy can replace any single
//!   fact per node or per [`SchemaContext`] while inheriting the rest
//! - **Handler binding**: markers naming static handler methods are bound on
//!   demand, with a binding error when the method does not exist
//! - **Host model**: [`host::HostTypeRegistry`] and
//!   [`host::RuntimeTypeBuilder`] describe host types in memory
//!
//! # Architecture
//!
//! ```text
//!   caller
//!     |
//!     v
//!   XamlType --(lookup_*)--> TypeLookup --(cache miss)--> defaults
//!     |                                                     |
//!     v                                                     v
//!   SchemaContext (settings, interning)          HostTypeDescriptor
//! ```
//!
//! # Example
//!
//! ```rust
//! use xaml_schema::SchemaContext;
//!
//! let ctx = SchemaContext::with_core_library().unwrap();
//! let reference = ctx
//!     .get_xaml_type_by_name("System.Windows.Markup.Reference")
//!     .unwrap();
//!
//! assert!(reference.is_markup_extension());
//! assert!(!reference.is_constructible());
//! assert_eq!(reference.content_property().unwrap().name(), "Name");
//! ```

pub mod config;
pub mod context;
pub mod converter;
pub mod error;
pub mod handler;
pub mod host;
pub mod invoker;
pub mod language;
pub mod member;
pub mod xaml_type;

pub use config::SchemaSettings;
pub use context::SchemaContext;
pub use converter::{ValueConverterKind, XamlValueConverter};
pub use error::{Result, SchemaError};
pub use handler::{
    SetMarkupExtensionArgs, SetMarkupExtensionHandler, SetTypeConverterArgs,
    SetTypeConverterHandler,
};
pub use invoker::XamlTypeInvoker;
pub use member::{MemberKind, XamlMember};
pub use xaml_type::{defaults, CollectionKind, DefaultLookup, TypeCache, TypeLookup, XamlType};
