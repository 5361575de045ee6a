use proptest::prelude::*;
use std::collections::HashSet;
use xmeta_registry::prelude::*;

fn uri_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,12}".prop_map(|tail| format!("http://ns.example.com/{tail}/"))
}

fn prefix_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]{0,7}".prop_map(String::from)
}

proptest! {
    #[test]
    fn bijection_survives_arbitrary_registrations(
        pairs in proptest::collection::vec((uri_strategy(), prefix_strategy()), 1..32)
    ) {
        let registry = Registry::default();

        for (uri, prefix) in &pairs {
            registry.register_namespace(uri, prefix).unwrap();
        }

        let by_uri = registry.namespaces();
        let by_prefix = registry.prefixes();
        prop_assert_eq!(by_uri.len(), by_prefix.len());

        for (uri, prefix) in &by_uri {
            prop_assert_eq!(by_prefix.get(prefix), Some(uri));
            let found_prefix = registry.prefix_for(uri);
            prop_assert_eq!(found_prefix.as_deref(), Some(prefix.as_str()));
            let found_uri = registry.uri_for(prefix);
            prop_assert_eq!(found_uri.as_deref(), Some(uri.as_str()));
        }
    }

    #[test]
    fn one_suggestion_yields_distinct_prefixes_per_uri(
        tails in proptest::collection::hash_set("[a-z]{1,12}", 1..32),
        suggestion in prefix_strategy(),
    ) {
        let registry = Registry::default();
        let mut seen = HashSet::new();

        for tail in &tails {
            let uri = format!("http://ns.example.com/{tail}/");
            let prefix = registry.register_namespace(&uri, &suggestion).unwrap();
            prop_assert!(seen.insert(prefix), "derived prefix reused");
        }

        prop_assert_eq!(registry.namespace_count(), tails.len());
    }

    #[test]
    fn reregistration_never_changes_the_bound_prefix(
        uri in uri_strategy(),
        first in prefix_strategy(),
        later in proptest::collection::vec(prefix_strategy(), 0..8),
    ) {
        let registry = Registry::default();
        let bound = registry.register_namespace(&uri, &first).unwrap();

        for suggestion in &later {
            let again = registry.register_namespace(&uri, suggestion).unwrap();
            prop_assert_eq!(&again, &bound);
        }
        prop_assert_eq!(registry.namespace_count(), 1);
    }

    #[test]
    fn alias_resolution_returns_exactly_what_was_registered(
        props in proptest::collection::hash_set("[a-zA-Z]{1,10}", 1..16),
        form in prop_oneof![
            Just(ArrayForm::Direct),
            Just(ArrayForm::ArrayFirstItem),
            Just(ArrayForm::AltTextDefaultItem),
        ],
    ) {
        let registry = Registry::default();

        for prop in &props {
            registry
                .register_alias("http://a/", prop, "http://b/", &prop.to_lowercase(), form)
                .unwrap();
        }

        for prop in &props {
            let info = registry.resolve_alias("http://a/", prop).unwrap();
            prop_assert_eq!(&info.alias_prop, prop);
            prop_assert_eq!(&info.actual_prop, &prop.to_lowercase());
            prop_assert_eq!(info.array_form, form);
        }
        prop_assert_eq!(registry.alias_count(), props.len());
    }
}
