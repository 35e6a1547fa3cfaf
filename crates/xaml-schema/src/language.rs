// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema-language constants and naming rules.

/// The canonical schema namespace for built-in types.
pub const XAML_2006_NAMESPACE: &str = "http://schemas.microsoft.com/winfx/2006/xaml";

/// Prefix of namespaces that map directly onto a host namespace and assembly.
pub const CLR_NAMESPACE_PREFIX: &str = "clr-namespace:";

/// Format the namespace URI for a host type living outside the schema library.
///
/// ```
/// use xaml_schema::language::clr_namespace_uri;
///
/// assert_eq!(
///     clr_namespace_uri("Acme.Widgets", "Acme"),
///     "clr-namespace:Acme.Widgets;assembly=Acme"
/// );
/// ```
pub fn clr_namespace_uri(namespace: &str, assembly: &str) -> String {
    format!("{}{};assembly={}", CLR_NAMESPACE_PREFIX, namespace, assembly)
}

/// Strip the generic arity suffix from a host type name (``List`1`` -> `List`).
pub fn xaml_name_of(host_name: &str) -> &str {
    match host_name.find('`') {
        Some(idx) => &host_name[..idx],
        None => host_name,
    }
}

/// Check whether `name` is usable as a type or member name in markup.
pub fn is_valid_xaml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}
