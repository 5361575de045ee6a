pub mod fixtures;

use fixtures::{empty_registry, seeded_registry};
use xmeta_registry::prelude::*;

#[test]
fn namespace_registration_is_idempotent() {
    let registry = empty_registry();

    let first = registry.register_namespace("http://u/", "p").expect("register failed");
    let before = registry.namespaces().len();

    // A second call with a different suggestion returns the same prefix.
    let second = registry.register_namespace("http://u/", "different").expect("register failed");

    assert_eq!(first, second);
    assert_eq!(registry.namespaces().len(), before);
}

#[test]
fn bijection_invariant_holds_for_every_pair() {
    let registry = seeded_registry();
    registry.register_namespace("http://extra/", "extra").expect("register failed");

    for (uri, prefix) in registry.namespaces() {
        assert_eq!(registry.uri_for(&prefix).as_deref(), Some(uri.as_str()));
        assert_eq!(registry.prefix_for(&uri).as_deref(), Some(prefix.as_str()));
    }
    for (prefix, uri) in registry.prefixes() {
        assert_eq!(registry.prefix_for(&uri).as_deref(), Some(prefix.as_str()));
    }
}

#[test]
fn collision_resolution_derives_unused_prefixes() {
    let registry = empty_registry();
    registry.register_namespace("http://a/", "xmp").expect("register failed");

    let derived = registry.register_namespace("http://b/", "xmp").expect("register failed");

    assert_ne!(derived, "xmp");
    let prefixes = registry.prefixes();
    assert_eq!(prefixes.len(), 2);
    assert!(prefixes.contains_key(&derived));
}

#[test]
fn end_to_end_prefix_scenario() {
    let registry = empty_registry();

    let xmp = registry
        .register_namespace("http://ns.adobe.com/xap/1.0/", "xmp")
        .expect("register failed");
    assert_eq!(xmp, "xmp");

    let again = registry
        .register_namespace("http://ns.adobe.com/xap/1.0/", "foo")
        .expect("register failed");
    assert_eq!(again, "xmp");

    let derived = registry
        .register_namespace("http://purl.org/dc/elements/1.1/", "xmp")
        .expect("register failed");
    assert_eq!(derived, "xmp2");
}

#[test]
fn lookups_report_absence_without_failing() {
    let registry = empty_registry();

    assert!(registry.prefix_for("http://nowhere/").is_none());
    assert!(registry.uri_for("nowhere").is_none());
    assert!(registry.resolve_alias("http://nowhere/", "x").is_none());
    assert!(registry.find_alias("nowhere:x").is_none());
    assert!(registry.find_aliases("http://nowhere/").is_empty());
    assert!(registry.aliases().is_empty());
}

#[test]
fn alias_registration_is_idempotent() {
    let registry = empty_registry();
    registry.register_namespace("http://a/", "a").expect("register failed");

    registry
        .register_alias("http://a/", "p", "http://b/", "q", ArrayForm::Direct)
        .expect("first registration");
    registry
        .register_alias("http://a/", "p", "http://b/", "q", ArrayForm::Direct)
        .expect("identical re-registration");

    let aliases = registry.aliases();
    assert_eq!(aliases.len(), 1);
    assert!(aliases.contains_key("a:p"));
}

#[test]
fn alias_conflict_keeps_the_original_mapping() {
    let registry = empty_registry();
    registry
        .register_alias("http://a/", "p", "http://b/", "q", ArrayForm::Direct)
        .expect("first registration");

    let err = registry
        .register_alias("http://a/", "p", "http://b/", "other", ArrayForm::Direct)
        .unwrap_err();
    assert!(matches!(err, RegistryError::InconsistentAlias { .. }));

    let info = registry.resolve_alias("http://a/", "p").expect("original mapping");
    assert_eq!(info.actual_prop, "q");
}

#[test]
fn alias_deletion_is_idempotent() {
    let registry = empty_registry();
    registry
        .register_alias("http://a/", "p", "http://b/", "q", ArrayForm::Direct)
        .expect("register failed");

    registry.delete_alias("http://a/", "p");
    assert!(registry.resolve_alias("http://a/", "p").is_none());

    // Deleting again is a no-op, not an error.
    registry.delete_alias("http://a/", "p");
}

#[test]
fn namespace_deletion_is_idempotent_and_total() {
    let registry = empty_registry();
    registry.register_namespace("http://a/", "a").expect("register failed");

    registry.delete_namespace("http://a/");
    assert!(registry.prefix_for("http://a/").is_none());
    assert!(registry.uri_for("a").is_none());

    registry.delete_namespace("http://a/");
    registry.delete_namespace("");
}

#[test]
fn find_aliases_filters_by_alias_side_namespace() {
    let registry = seeded_registry();

    let xmp_aliases = registry.find_aliases("http://ns.adobe.com/xap/1.0/");
    assert!(!xmp_aliases.is_empty());
    assert!(xmp_aliases.iter().all(|info| info.alias_ns == "http://ns.adobe.com/xap/1.0/"));

    // Dublin Core is an alias target, never an alias namespace, in the seed.
    assert!(registry.find_aliases("http://purl.org/dc/elements/1.1/").is_empty());
}

#[test]
fn find_aliases_by_actual_filters_by_target_namespace() {
    let registry = seeded_registry();

    let onto_dc = registry.find_aliases_by_actual("http://purl.org/dc/elements/1.1/");
    assert!(!onto_dc.is_empty());
    assert!(onto_dc.iter().all(|info| info.actual_ns == "http://purl.org/dc/elements/1.1/"));
}

#[test]
fn alias_snapshot_is_keyed_by_qname_and_stays_fixed() {
    let registry = empty_registry();
    registry.register_namespace("http://a/", "a").expect("register failed");
    registry
        .register_alias("http://a/", "p", "http://b/", "q", ArrayForm::Direct)
        .expect("register failed");

    let snapshot = registry.aliases();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot["a:p"].actual_ns, "http://b/");

    registry
        .register_alias("http://a/", "r", "http://b/", "s", ArrayForm::Direct)
        .expect("register failed");
    assert_eq!(snapshot.len(), 1, "snapshots must not change retroactively");
    assert_eq!(registry.aliases().len(), 2);
}

#[test]
fn seeded_aliases_resolve_by_qname() {
    let registry = seeded_registry();

    let author = registry.find_alias("xmp:Author").expect("standard alias");
    assert_eq!(author.actual_prop, "creator");
    assert_eq!(author.array_form, ArrayForm::ArrayFirstItem);

    let subject = registry.find_alias("pdf:Subject").expect("standard alias");
    assert_eq!(subject.array_form, ArrayForm::AltTextDefaultItem);
}
