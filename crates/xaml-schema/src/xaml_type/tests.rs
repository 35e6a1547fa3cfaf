// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Tests for type nodes and the default lookups.

use super::*;
use crate::config::SchemaSettings;
use crate::error::SchemaError;
use crate::handler::{SetMarkupExtensionArgs, SetTypeConverterArgs};
use crate::host::{
    ConstructorInfo, HostTypeRegistry, Marker, MethodInfo, RuntimeTypeBuilder, Visibility,
};
use crate::language::XAML_2006_NAMESPACE;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::sync::Barrier;
use std::thread;

fn ctx() -> Arc<SchemaContext> {
    SchemaContext::with_core_library().expect("core context")
}

fn known(ctx: &Arc<SchemaContext>, full_name: &str) -> XamlType {
    let host = ctx.registry().require(full_name).expect("registered");
    XamlType::new(host, ctx)
}

fn register(ctx: &Arc<SchemaContext>, builder: RuntimeTypeBuilder) -> HostType {
    ctx.registry().register(builder.build())
}

fn object(ctx: &Arc<SchemaContext>) -> HostType {
    ctx.object_type().clone()
}

fn hash_of(ty: &XamlType) -> u64 {
    let mut hasher = DefaultHasher::new();
    ty.hash(&mut hasher);
    hasher.finish()
}

// ---------------------------------------------------------------------------
// Identity and equality
// ---------------------------------------------------------------------------

#[test]
fn unknown_widget_scenario() {
    let ctx = ctx();
    let widget = XamlType::unknown("ns", "Widget", None, &ctx);

    assert!(widget.is_unknown());
    assert!(widget.underlying_type().is_none());
    assert_eq!(widget.name(), "Widget");
    assert_eq!(widget.preferred_namespace(), "ns");

    let base = widget.base_type().expect("unknown nodes derive from object");
    assert_eq!(base.host_type(), Some(ctx.object_type()));
    assert!(base.base_type().is_none());

    let again = XamlType::unknown("ns", "Widget", None, &ctx);
    assert_eq!(widget, again);
    assert_eq!(hash_of(&widget), hash_of(&again));
}

#[test]
fn equality_laws_hold() {
    let ctx = ctx();
    let item = Arc::new(XamlType::unknown("ns", "Item", None, &ctx));
    let make = || XamlType::unknown("ns", "Box", Some(vec![Arc::clone(&item)]), &ctx);
    let (a, b, c) = (make(), make(), make());

    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_eq!(b, c);
    assert_eq!(a, c);
    assert_eq!(hash_of(&a), hash_of(&b));

    let string = known(&ctx, "System.String");
    let string_again = known(&ctx, "System.String");
    assert_eq!(string, string_again);
    assert_eq!(hash_of(&string), hash_of(&string_again));
}

#[test]
fn equality_against_absent_is_false() {
    let ctx = ctx();
    let widget = XamlType::unknown("ns", "Widget", None, &ctx);
    assert!(!widget.equals_opt(None));
    assert!(widget.equals_opt(Some(&widget)));
}

#[test]
fn identity_fields_distinguish_nodes() {
    let ctx = ctx();
    let a = XamlType::unknown("ns", "Widget", None, &ctx);
    assert_ne!(a, XamlType::unknown("other", "Widget", None, &ctx));
    assert_ne!(a, XamlType::unknown("ns", "Gadget", None, &ctx));

    // Same name and namespace, but one is backed by a host type.
    let host = register(
        &ctx,
        RuntimeTypeBuilder::class("", "Widget", "Acme").base(&object(&ctx)),
    );
    let backed = XamlType::new(host, &ctx);
    let unbacked = XamlType::unknown(backed.preferred_namespace(), "Widget", None, &ctx);
    assert_eq!(backed.name(), unbacked.name());
    assert_ne!(backed, unbacked);
}

#[test]
fn type_arguments_compare_length_then_pairwise() {
    let ctx = ctx();
    let x = Arc::new(XamlType::with_name("X", None, &ctx));
    let y = Arc::new(XamlType::with_name("Y", None, &ctx));

    let one = XamlType::with_name("Pair", Some(vec![Arc::clone(&x)]), &ctx);
    let two = XamlType::with_name("Pair", Some(vec![Arc::clone(&x), Arc::clone(&y)]), &ctx);
    let swapped = XamlType::with_name("Pair", Some(vec![Arc::clone(&y), Arc::clone(&x)]), &ctx);
    let none = XamlType::with_name("Pair", None, &ctx);

    assert_ne!(one, two);
    assert_ne!(two, swapped);
    assert_ne!(one, none);

    let rebuilt = XamlType::with_name(
        "Pair",
        Some(vec![
            Arc::new(XamlType::with_name("X", None, &ctx)),
            Arc::new(XamlType::with_name("Y", None, &ctx)),
        ]),
        &ctx,
    );
    assert_eq!(two, rebuilt);
    assert_eq!(hash_of(&two), hash_of(&rebuilt));
}

#[test]
fn empty_type_arguments_are_normalized() {
    let ctx = ctx();
    let empty = XamlType::unknown("ns", "Widget", Some(Vec::new()), &ctx);
    assert!(empty.type_arguments().is_none());
    assert_eq!(empty, XamlType::unknown("ns", "Widget", None, &ctx));
}

#[test]
fn empty_names_and_namespaces_are_accepted() {
    let ctx = ctx();
    let nameless = XamlType::unknown("ns", "", None, &ctx);
    assert_eq!(nameless.name(), "");
    assert!(nameless.is_unknown());
    assert!(!nameless.is_name_valid());
    assert_eq!(nameless, XamlType::unknown("ns", "", None, &ctx));
    assert_ne!(nameless, XamlType::unknown("ns", "Widget", None, &ctx));

    let bare = XamlType::unknown("", "Widget", None, &ctx);
    assert_eq!(bare.preferred_namespace(), "");
    assert_eq!(bare, XamlType::with_name("Widget", None, &ctx));
}

#[test]
fn hash_set_deduplicates_equal_nodes() {
    let ctx = ctx();
    let mut set = HashSet::new();
    set.insert(known(&ctx, "System.Int32"));
    set.insert(known(&ctx, "System.Int32"));
    set.insert(XamlType::unknown("ns", "Widget", None, &ctx));
    set.insert(XamlType::unknown("ns", "Widget", None, &ctx));
    set.insert(XamlType::unknown("ns", "Gadget", None, &ctx));
    assert_eq!(set.len(), 3);
}

#[test]
fn generic_arity_is_stripped_from_names() {
    let ctx = ctx();
    let item = register(&ctx, RuntimeTypeBuilder::class("Acme", "Item", "Acme"));
    let list = register(
        &ctx,
        RuntimeTypeBuilder::class("Acme", "List`1", "Acme")
            .base(&object(&ctx))
            .generic_argument(&item),
    );
    let node = XamlType::new(list, &ctx);
    assert_eq!(node.name(), "List");
    assert!(node.is_generic());
    // Known nodes keep their arguments on the host type, not in the identity.
    assert!(node.type_arguments().is_none());
}

// ---------------------------------------------------------------------------
// Preferred namespace
// ---------------------------------------------------------------------------

#[test]
fn primitives_and_object_use_schema_namespace() {
    let ctx = ctx();
    for name in ["System.Object", "System.String", "System.Int32", "System.Boolean"] {
        assert_eq!(known(&ctx, name).preferred_namespace(), XAML_2006_NAMESPACE, "{}", name);
    }
}

#[test]
fn predefined_types_use_schema_namespace() {
    let ctx = ctx();
    for name in [
        "System.Uri",
        "System.TimeSpan",
        "System.Windows.Markup.XData",
        "System.Windows.Markup.MemberDefinition",
    ] {
        assert_eq!(known(&ctx, name).preferred_namespace(), XAML_2006_NAMESPACE, "{}", name);
    }
}

#[test]
fn library_markup_extensions_use_schema_namespace() {
    let ctx = ctx();
    let base = ctx
        .registry()
        .require("System.Windows.Markup.MarkupExtension")
        .expect("markup extension");
    let in_library = register(
        &ctx,
        RuntimeTypeBuilder::class("System.Windows.Markup", "StaticExtension", "System.Xaml")
            .base(&base),
    );
    let elsewhere = register(
        &ctx,
        RuntimeTypeBuilder::class("Acme.Markup", "Lookup", "Acme.Lib").base(&base),
    );

    assert_eq!(XamlType::new(in_library, &ctx).preferred_namespace(), XAML_2006_NAMESPACE);
    assert_eq!(
        XamlType::new(elsewhere, &ctx).preferred_namespace(),
        "clr-namespace:Acme.Markup;assembly=Acme.Lib"
    );
}

#[test]
fn other_types_use_clr_namespace() {
    let ctx = ctx();
    let widget = register(
        &ctx,
        RuntimeTypeBuilder::class("Acme.Controls", "Widget", "Acme.Lib").base(&object(&ctx)),
    );
    assert_eq!(
        XamlType::new(widget, &ctx).preferred_namespace(),
        "clr-namespace:Acme.Controls;assembly=Acme.Lib"
    );
}

#[test]
fn predefined_list_comes_from_settings() {
    let registry = Arc::new(HostTypeRegistry::with_core_library());
    let settings = SchemaSettings {
        predefined_types: Vec::new(),
        ..SchemaSettings::default()
    };
    let ctx = SchemaContext::new(registry, settings).expect("context");
    assert_eq!(
        known(&ctx, "System.Uri").preferred_namespace(),
        "clr-namespace:System;assembly=System"
    );
}

// ---------------------------------------------------------------------------
// Construction rules
// ---------------------------------------------------------------------------

#[test]
fn plain_class_with_default_constructor_is_constructible() {
    let ctx = ctx();
    let widget = register(
        &ctx,
        RuntimeTypeBuilder::class("Acme", "Widget", "Acme")
            .base(&object(&ctx))
            .default_constructor(),
    );
    let node = XamlType::new(widget, &ctx);
    assert!(!node.construction_requires_arguments());
    assert!(node.is_constructible());
}

#[test]
fn construction_requires_arguments_rules() {
    let ctx = ctx();
    // Abstract types.
    assert!(known(&ctx, "System.ValueType").construction_requires_arguments());
    let member_definition = known(&ctx, "System.Windows.Markup.MemberDefinition");
    assert!(member_definition.construction_requires_arguments());
    // Textual primitive.
    assert!(known(&ctx, "System.String").construction_requires_arguments());
    // Exempt time-interval type, despite having no parameterless constructor.
    assert!(!known(&ctx, "System.TimeSpan").construction_requires_arguments());
    // Other primitives.
    assert!(!known(&ctx, "System.Int32").construction_requires_arguments());
    assert!(!known(&ctx, "System.DateTime").construction_requires_arguments());
    // Only argument-taking constructors.
    assert!(known(&ctx, "System.Uri").construction_requires_arguments());
    // No host type.
    let unknown = XamlType::with_name("Widget", None, &ctx);
    assert!(!unknown.construction_requires_arguments());
}

#[test]
fn non_public_parameterless_constructor_counts() {
    let ctx = ctx();
    let guarded = register(
        &ctx,
        RuntimeTypeBuilder::class("Acme", "Guarded", "Acme")
            .base(&object(&ctx))
            .constructor(ConstructorInfo::non_public(0)),
    );
    assert!(!XamlType::new(guarded, &ctx).construction_requires_arguments());
}

#[test]
fn type_initializer_does_not_count() {
    let ctx = ctx();
    let host = register(
        &ctx,
        RuntimeTypeBuilder::class("Acme", "Statics", "Acme")
            .base(&object(&ctx))
            .constructor(ConstructorInfo::type_initializer())
            .constructor(ConstructorInfo::public(1)),
    );
    let node = XamlType::new(host, &ctx);
    assert!(node.construction_requires_arguments());
    assert!(!node.is_constructible());
}

#[test]
fn arrays_are_not_constructible() {
    let ctx = ctx();
    let int = ctx.registry().require("System.Int32").expect("int");
    let array = ctx.registry().array_of(&int).expect("array");
    let node = XamlType::new(array, &ctx);
    assert!(node.is_array());
    assert!(!node.is_constructible());

    // Excluded even when a parameterless constructor is available.
    let array_base = ctx.registry().require("System.Array").expect("array base");
    let double = ctx.registry().require("System.Double").expect("double");
    let buffer = register(
        &ctx,
        RuntimeTypeBuilder::array_of(&double, &array_base).default_constructor(),
    );
    let node = XamlType::new(buffer, &ctx);
    assert!(node.is_array());
    assert!(!node.construction_requires_arguments());
    assert!(!node.is_constructible());
}

#[test]
fn markup_extensions_are_not_constructible() {
    let ctx = ctx();
    let reference = known(&ctx, "System.Windows.Markup.Reference");
    assert!(reference.is_markup_extension());
    assert!(!reference.construction_requires_arguments());
    assert!(!reference.is_constructible());
}

#[test]
fn type_node_type_is_not_constructible() {
    let registry = Arc::new(HostTypeRegistry::with_core_library());
    let object = registry.get("System.Object").expect("object");
    registry.register(
        RuntimeTypeBuilder::class("Acme", "Node", "Acme")
            .base(&object)
            .default_constructor()
            .build(),
    );
    let settings = SchemaSettings {
        type_node_type: "Acme.Node".to_string(),
        ..SchemaSettings::default()
    };
    let ctx = SchemaContext::new(registry, settings).expect("context");

    let node = known(&ctx, "Acme.Node");
    assert!(!node.construction_requires_arguments());
    assert!(!node.is_constructible());
}

// ---------------------------------------------------------------------------
// Collections and dictionaries
// ---------------------------------------------------------------------------

#[test]
fn generic_collection_item_type_scenario() {
    let ctx = ctx();
    let item = register(&ctx, RuntimeTypeBuilder::class("Acme", "Item", "Acme"));
    let list = register(
        &ctx,
        RuntimeTypeBuilder::class("Acme", "List`1", "Acme")
            .base(&object(&ctx))
            .generic_argument(&item)
            .implements(Capability::GenericCollection),
    );
    let node = XamlType::new(list, &ctx);
    assert!(node.is_collection());
    assert!(!node.is_dictionary());
    assert_eq!(node.item_type().expect("item").name(), "Item");
    assert!(node.key_type().is_none());
}

#[test]
fn non_generic_collection_holds_objects() {
    let ctx = ctx();
    let bag = register(
        &ctx,
        RuntimeTypeBuilder::class("Acme", "Bag", "Acme")
            .base(&object(&ctx))
            .implements(Capability::Collection),
    );
    let node = XamlType::new(bag, &ctx);
    assert!(node.is_collection());
    assert_eq!(node.item_type().expect("item").host_type(), Some(ctx.object_type()));
}

#[test]
fn arrays_are_not_collections() {
    let ctx = ctx();
    let int = ctx.registry().require("System.Int32").expect("int");
    let array = ctx.registry().array_of(&int).expect("array");
    let node = XamlType::new(array, &ctx);

    assert!(!node.is_collection());
    let item = node.item_type().expect("element type");
    assert_eq!(*item, XamlType::new(int, &ctx));
}

#[test]
fn dictionaries_expose_key_type() {
    let ctx = ctx();
    let key = register(&ctx, RuntimeTypeBuilder::class("Acme", "Key", "Acme"));
    let value = register(&ctx, RuntimeTypeBuilder::class("Acme", "Value", "Acme"));
    let map = register(
        &ctx,
        RuntimeTypeBuilder::class("Acme", "Map`2", "Acme")
            .base(&object(&ctx))
            .generic_argument(&key)
            .generic_argument(&value)
            .implements(Capability::GenericDictionary),
    );
    let table = register(
        &ctx,
        RuntimeTypeBuilder::class("Acme", "Table", "Acme")
            .base(&object(&ctx))
            .implements(Capability::Dictionary),
    );

    let map = XamlType::new(map, &ctx);
    assert!(map.is_dictionary());
    assert!(!map.is_collection());
    assert_eq!(map.key_type().expect("key").name(), "Key");
    assert!(map.item_type().is_none());

    let table = XamlType::new(table, &ctx);
    assert!(table.is_dictionary());
    assert_eq!(table.key_type().expect("key").host_type(), Some(ctx.object_type()));
}

#[test]
fn plain_types_have_no_item_or_key_type() {
    let ctx = ctx();
    let string = known(&ctx, "System.String");
    assert!(!string.is_collection());
    assert!(!string.is_dictionary());
    assert!(string.item_type().is_none());
    assert!(string.key_type().is_none());

    let unknown = XamlType::with_name("Widget", None, &ctx);
    assert!(unknown.item_type().is_none());
    assert!(unknown.key_type().is_none());
}

// ---------------------------------------------------------------------------
// Base chain
// ---------------------------------------------------------------------------

#[test]
fn base_chain_terminates() {
    let ctx = ctx();
    let int = ctx.registry().require("System.Int32").expect("int");
    let array = ctx.registry().array_of(&int).expect("array");
    let starts = vec![
        known(&ctx, "System.Object"),
        known(&ctx, "System.Int32"),
        known(&ctx, "System.Windows.Markup.PropertyDefinition"),
        known(&ctx, "System.Windows.Markup.Reference"),
        XamlType::new(array, &ctx),
        XamlType::with_name("Widget", None, &ctx),
    ];

    for start in starts {
        let mut steps = 0;
        let mut current = start.base_type();
        while let Some(node) = current {
            steps += 1;
            assert!(steps < 16, "base chain of {} does not terminate", start);
            current = node.base_type();
        }
    }
}

#[test]
fn object_base_ends_the_chain() {
    let ctx = ctx();
    assert!(known(&ctx, "System.Object").base_type().is_none());
    assert!(known(&ctx, "System.Uri").base_type().is_none());

    let reference = known(&ctx, "System.Windows.Markup.Reference");
    let base = reference.base_type().expect("markup extension");
    assert_eq!(base.name(), "MarkupExtension");
    assert!(base.base_type().is_none());
}

#[test]
fn base_node_shares_context_and_invoker() {
    let ctx = ctx();
    let widget = XamlType::unknown("ns", "Widget", None, &ctx);
    let base = widget.base_type().expect("object");
    assert!(Arc::ptr_eq(base.schema_context(), widget.schema_context()));
    assert!(Arc::ptr_eq(&base.invoker(), &widget.invoker()));
    assert_eq!(widget.invoker().target_type(), Some("Widget"));
}

// ---------------------------------------------------------------------------
// Flags and markers
// ---------------------------------------------------------------------------

#[test]
fn nullability() {
    let ctx = ctx();
    assert!(!known(&ctx, "System.Int32").is_nullable());
    assert!(known(&ctx, "System.String").is_nullable());
    assert!(XamlType::with_name("Widget", None, &ctx).is_nullable());

    let value_type = ctx.registry().require("System.ValueType").expect("value type");
    let wrapper = register(
        &ctx,
        RuntimeTypeBuilder::value_type("System", "Nullable`1", "mscorlib")
            .base(&value_type)
            .implements(Capability::NullableWrapper),
    );
    assert!(XamlType::new(wrapper, &ctx).is_nullable());
}

#[test]
fn visibility() {
    let ctx = ctx();
    let make = |name: &str, visibility: Visibility| {
        let host = register(
            &ctx,
            RuntimeTypeBuilder::class("Acme", name, "Acme").visibility(visibility),
        );
        XamlType::new(host, &ctx).is_public()
    };
    assert!(make("Open", Visibility::Public));
    assert!(make("Nested", Visibility::NestedPublic));
    assert!(!make("Hidden", Visibility::NotPublic));
    assert!(!make("NestedHidden", Visibility::NestedNonPublic));
    assert!(XamlType::with_name("Widget", None, &ctx).is_public());
}

#[test]
fn marker_flags() {
    let ctx = ctx();
    let host = register(
        &ctx,
        RuntimeTypeBuilder::class("Acme", "Panel", "Acme")
            .base(&object(&ctx))
            .implements(Capability::NameScope)
            .marker(Marker::Ambient)
            .marker(Marker::WhitespaceSignificantCollection)
            .marker(Marker::TrimSurroundingWhitespace)
            .marker(Marker::UsableDuringInitialization { usable: true }),
    );
    let panel = XamlType::new(host, &ctx);
    assert!(panel.is_name_scope());
    assert!(panel.is_ambient());
    assert!(panel.is_whitespace_significant_collection());
    assert!(panel.trim_surrounding_whitespace());
    assert!(panel.is_usable_during_initialization());

    let plain = known(&ctx, "System.Uri");
    assert!(!plain.is_name_scope());
    assert!(!plain.is_ambient());
    assert!(!plain.is_whitespace_significant_collection());
    assert!(!plain.trim_surrounding_whitespace());
    assert!(!plain.is_usable_during_initialization());
}

#[test]
fn usable_during_initialization_reads_the_flag() {
    let ctx = ctx();
    let host = register(
        &ctx,
        RuntimeTypeBuilder::class("Acme", "Late", "Acme")
            .marker(Marker::UsableDuringInitialization { usable: false }),
    );
    assert!(!XamlType::new(host, &ctx).is_usable_during_initialization());
}

#[test]
fn markers_are_inherited() {
    let ctx = ctx();
    let base = register(
        &ctx,
        RuntimeTypeBuilder::class("Acme", "AmbientBase", "Acme").marker(Marker::Ambient),
    );
    let derived = register(&ctx, RuntimeTypeBuilder::class("Acme", "Derived", "Acme").base(&base));
    assert!(XamlType::new(derived, &ctx).is_ambient());
}

#[test]
fn unknown_nodes_get_conservative_answers() {
    let ctx = ctx();
    let unknown = XamlType::with_name("Widget", None, &ctx);
    assert!(unknown.is_whitespace_significant_collection());
    assert!(!unknown.is_markup_extension());
    assert!(!unknown.is_name_scope());
    assert!(!unknown.is_ambient());
    assert!(!unknown.is_array());
    assert!(!unknown.is_generic());
    assert!(unknown.is_constructible());
    assert!(unknown.content_property().is_none());
    assert!(unknown.markup_extension_return_type().is_none());
    assert!(unknown.get_member("Name").is_none());
}

#[test]
fn x_data_is_always_false() {
    let ctx = ctx();
    assert!(!known(&ctx, "System.Windows.Markup.XData").is_x_data());
    assert!(!known(&ctx, "System.String").is_x_data());
}

#[test]
fn name_validity() {
    let ctx = ctx();
    assert!(XamlType::with_name("Widget", None, &ctx).is_name_valid());
    assert!(!XamlType::with_name("1Widget", None, &ctx).is_name_valid());
    assert!(!XamlType::with_name("Wid-get", None, &ctx).is_name_valid());
}

#[test]
fn markup_extension_return_type_is_wrapped() {
    let ctx = ctx();
    let reference = known(&ctx, "System.Windows.Markup.Reference");
    let returned = reference.markup_extension_return_type().expect("declared");
    assert_eq!(returned.host_type(), Some(ctx.object_type()));
    assert!(known(&ctx, "System.String").markup_extension_return_type().is_none());
}

// ---------------------------------------------------------------------------
// Members
// ---------------------------------------------------------------------------

fn control(ctx: &Arc<SchemaContext>) -> XamlType {
    let string = ctx.registry().require("System.String").expect("string");
    let host = register(
        ctx,
        RuntimeTypeBuilder::class("Acme", "Control", "Acme")
            .base(&object(ctx))
            .default_constructor()
            .marker(Marker::ContentProperty {
                name: Some("Items".to_string()),
            })
            .property("Items", &string, false)
            .property("Title", &string, true)
            .event("Clicked", None),
    );
    XamlType::new(host, ctx)
}

#[test]
fn get_member_requires_writable_properties() {
    let ctx = ctx();
    let node = control(&ctx);

    let title = node.get_member("Title").expect("writable");
    assert_eq!(title.name(), "Title");
    assert!(!title.is_read_only());
    assert_eq!(title.declaring_type(), "Acme.Control");

    assert!(node.get_member("Items").is_none());
    assert!(node.get_member("Missing").is_none());

    let clicked = node.get_member("Clicked").expect("event");
    assert!(clicked.is_event());
}

#[test]
fn content_property_accepts_read_only_members() {
    let ctx = ctx();
    let node = control(&ctx);
    let content = node.content_property().expect("content property");
    assert_eq!(content.name(), "Items");
    assert!(content.is_read_only());

    assert_eq!(
        known(&ctx, "System.Windows.Markup.Reference")
            .content_property()
            .expect("reference content")
            .name(),
        "Name"
    );
    assert!(known(&ctx, "System.Uri").content_property().is_none());
}

#[test]
fn content_property_naming_a_missing_member_is_absent() {
    let ctx = ctx();
    let host = register(
        &ctx,
        RuntimeTypeBuilder::class("Acme", "Broken", "Acme").marker(Marker::ContentProperty {
            name: Some("Nope".to_string()),
        }),
    );
    assert!(XamlType::new(host, &ctx).content_property().is_none());
}

#[test]
fn inherited_members_are_found() {
    let ctx = ctx();
    let base = control(&ctx);
    let derived = register(
        &ctx,
        RuntimeTypeBuilder::class("Acme", "Button", "Acme")
            .base(base.host_type().expect("host")),
    );
    let node = XamlType::new(derived, &ctx);
    assert_eq!(node.get_member("Title").expect("inherited").name(), "Title");
    assert_eq!(node.content_property().expect("inherited marker").name(), "Items");
}

// ---------------------------------------------------------------------------
// Memoization
// ---------------------------------------------------------------------------

#[test]
fn node_results_are_memoized_by_reference() {
    let ctx = ctx();
    let reference = known(&ctx, "System.Windows.Markup.Reference");
    let a = reference.base_type().expect("base");
    let b = reference.base_type().expect("base");
    assert!(Arc::ptr_eq(&a, &b));

    let r1 = reference.markup_extension_return_type().expect("return");
    let r2 = reference.markup_extension_return_type().expect("return");
    assert!(Arc::ptr_eq(&r1, &r2));

    let c1 = reference.content_property().expect("content");
    let c2 = reference.content_property().expect("content");
    assert!(Arc::ptr_eq(&c1, &c2));

    let int = ctx.registry().require("System.Int32").expect("int");
    let array = XamlType::new(ctx.registry().array_of(&int).expect("array"), &ctx);
    let i1 = array.item_type().expect("item");
    let i2 = array.item_type().expect("item");
    assert!(Arc::ptr_eq(&i1, &i2));
}

#[test]
fn member_lookups_are_memoized_including_misses() {
    let ctx = ctx();
    let node = control(&ctx);

    let a = node.get_member("Title").expect("title");
    let b = node.get_member("Title").expect("title");
    assert!(Arc::ptr_eq(&a, &b));

    assert!(node.get_member("Missing").is_none());
    assert!(node.get_member("Missing").is_none());
    assert_eq!(node.cache().cached_member_count(), 2);

    // The read-only-eligible variant is cached separately.
    assert!(node.get_member("Items").is_none());
    assert!(node.content_property().is_some());
    assert_eq!(node.cache().cached_member_count(), 4);
}

#[test]
fn absent_results_are_cached() {
    let ctx = ctx();
    let string = known(&ctx, "System.String");
    assert!(string.item_type().is_none());
    assert!(matches!(string.cache().item_type.get(), Some(None)));
    assert!(string.base_type().is_none());
    assert!(matches!(string.cache().base_type.get(), Some(None)));
}

#[test]
fn concurrent_first_access_publishes_one_result() {
    let ctx = ctx();
    let node = Arc::new(known(&ctx, "System.Windows.Markup.Reference"));
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let node = Arc::clone(&node);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let base = node.base_type().expect("base");
                let content = node.content_property().expect("content");
                let member = node.get_member("Name").expect("member");
                (base, content, member, node.is_constructible())
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("thread"))
        .collect();
    let (base, content, member, constructible) = &results[0];
    for (b, c, m, k) in &results[1..] {
        assert!(Arc::ptr_eq(base, b));
        assert!(Arc::ptr_eq(content, c));
        assert!(Arc::ptr_eq(member, m));
        assert_eq!(constructible, k);
    }
}

// ---------------------------------------------------------------------------
// Overrides
// ---------------------------------------------------------------------------

struct EverythingIsAnExtension;

impl TypeLookup for EverythingIsAnExtension {
    fn lookup_is_markup_extension(&self, _ty: &XamlType) -> bool {
        true
    }
}

#[test]
fn derived_facts_follow_overridden_lookups() {
    let ctx = ctx();
    let widget = register(
        &ctx,
        RuntimeTypeBuilder::class("Acme", "Widget", "Acme")
            .base(&object(&ctx))
            .default_constructor(),
    );
    let plain = XamlType::new(widget.clone(), &ctx);
    let overridden = XamlType::new(widget, &ctx).with_lookup(Arc::new(EverythingIsAnExtension));

    assert!(plain.is_constructible());
    assert!(overridden.is_markup_extension());
    assert!(!overridden.is_constructible());
    // Identity is unaffected by the strategy.
    assert_eq!(plain, overridden);
}

#[test]
fn context_lookup_applies_to_new_nodes() {
    let ctx = SchemaContext::with_lookup(
        Arc::new(HostTypeRegistry::with_core_library()),
        SchemaSettings::default(),
        Arc::new(EverythingIsAnExtension),
    )
    .expect("context");
    let string = known(&ctx, "System.String");
    assert!(string.is_markup_extension());
    // Subordinate nodes use the context strategy as well.
    let unknown = XamlType::with_name("Widget", None, &ctx);
    assert!(unknown.base_type().expect("object").is_markup_extension());
}

// ---------------------------------------------------------------------------
// Extension points without a default
// ---------------------------------------------------------------------------

#[test]
fn policy_lookups_are_not_implemented_by_default() {
    let ctx = ctx();
    let node = known(&ctx, "System.String");
    let other = known(&ctx, "System.Object");

    assert!(node.get_attachable_member("Name").unwrap_err().is_not_implemented());
    assert!(node.get_all_members().unwrap_err().is_not_implemented());
    assert!(node.get_all_attachable_members().unwrap_err().is_not_implemented());
    assert!(node.get_aliased_property("Name").unwrap_err().is_not_implemented());
    assert!(node.get_positional_parameters(1).unwrap_err().is_not_implemented());
    assert!(node.allowed_content_types().unwrap_err().is_not_implemented());
    assert!(node.content_wrappers().unwrap_err().is_not_implemented());
    assert!(node.collection_kind().unwrap_err().is_not_implemented());
    assert!(node.custom_attribute_provider().unwrap_err().is_not_implemented());
    assert!(node.type_converter().unwrap_err().is_not_implemented());
    assert!(node.value_serializer().unwrap_err().is_not_implemented());
    assert!(node.deferring_loader().unwrap_err().is_not_implemented());
    assert!(node.get_xaml_namespaces().unwrap_err().is_not_implemented());
    assert!(node.can_assign_to(&other).unwrap_err().is_not_implemented());
}

#[test]
fn not_implemented_names_the_operation() {
    let ctx = ctx();
    let err = known(&ctx, "System.String").collection_kind().unwrap_err();
    assert_eq!(
        err,
        SchemaError::NotImplemented {
            operation: "lookup_collection_kind"
        }
    );
    assert!(err.to_string().contains("lookup_collection_kind"));
}

// ---------------------------------------------------------------------------
// Handler binding
// ---------------------------------------------------------------------------

#[test]
fn missing_markup_extension_handler_is_a_binding_error() {
    let ctx = ctx();
    let host = register(
        &ctx,
        RuntimeTypeBuilder::class("Acme", "Control", "Acme").marker(
            Marker::SetMarkupExtensionHandler {
                method: "ApplyExtension".to_string(),
            },
        ),
    );
    let node = XamlType::new(host, &ctx);
    let err = node.set_markup_extension_handler().unwrap_err();
    assert_eq!(
        err,
        SchemaError::HandlerBinding {
            handler: "XamlSetMarkupExtensionHandler",
            type_name: "Acme.Control".to_string(),
            method: "ApplyExtension".to_string(),
        }
    );
    // The failure is cached like any other result.
    assert_eq!(node.set_markup_extension_handler().unwrap_err(), err);
}

#[test]
fn handler_with_wrong_shape_does_not_bind() {
    let ctx = ctx();
    let host = register(
        &ctx,
        RuntimeTypeBuilder::class("Acme", "Control", "Acme")
            .marker(Marker::SetTypeConverterHandler {
                method: "Convert".to_string(),
            })
            .method(MethodInfo::opaque("Convert", true, 2)),
    );
    let err = XamlType::new(host, &ctx).set_type_converter_handler().unwrap_err();
    assert!(matches!(err, SchemaError::HandlerBinding { .. }));
}

#[test]
fn declared_handlers_bind_and_run() {
    let ctx = ctx();
    let host = register(
        &ctx,
        RuntimeTypeBuilder::class("Acme", "Control", "Acme")
            .marker(Marker::SetMarkupExtensionHandler {
                method: "ApplyExtension".to_string(),
            })
            .marker(Marker::SetTypeConverterHandler {
                method: "ApplyConverter".to_string(),
            })
            .method(MethodInfo::markup_extension_handler(
                "ApplyExtension",
                Arc::new(|args: &mut SetMarkupExtensionArgs| args.handled = true),
            ))
            .method(MethodInfo::type_converter_handler(
                "ApplyConverter",
                Arc::new(|args: &mut SetTypeConverterArgs| {
                    args.handled = args.value == "auto";
                }),
            )),
    );
    let node = XamlType::new(host, &ctx);

    let extension = node
        .set_markup_extension_handler()
        .expect("binds")
        .expect("declared");
    assert_eq!(extension.method(), "ApplyExtension");
    let mut args = SetMarkupExtensionArgs {
        member: "Title".to_string(),
        ..Default::default()
    };
    extension.invoke(&mut args);
    assert!(args.handled);

    let converter = node
        .set_type_converter_handler()
        .expect("binds")
        .expect("declared");
    let mut args = SetTypeConverterArgs {
        value: "auto".to_string(),
        ..Default::default()
    };
    converter.invoke(&mut args);
    assert!(args.handled);
}

#[test]
fn no_marker_means_no_handler() {
    let ctx = ctx();
    let string = known(&ctx, "System.String");
    assert!(string.set_markup_extension_handler().expect("ok").is_none());
    assert!(string.set_type_converter_handler().expect("ok").is_none());

    let unknown = XamlType::with_name("Widget", None, &ctx);
    assert!(unknown.set_markup_extension_handler().expect("ok").is_none());
    assert!(unknown.set_type_converter_handler().expect("ok").is_none());
}
