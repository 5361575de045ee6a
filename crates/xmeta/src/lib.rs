//! Facade crate for the Xmeta schema registry and shared modules.
//! Re-exports domain primitives and aggregates registry initialization.
//! Keep this crate thin: it should compose other crates, not implement registry logic.
//!
//! ## Usage
//! - Build a [`Registry`] through [`init`] with a [`RegistryConfig`], or use
//!   [`Registry::builder`] directly for fine-grained seeding.
//! - Pull [`logger::Logger`] in binaries that want console or file logging.

pub use xmeta_domain as domain;
pub use xmeta_logger as logger;
pub use xmeta_registry as registry;

pub use xmeta_domain::config::RegistryConfig;
pub use xmeta_domain::forms::{ArrayForm, PropertyFlags};
pub use xmeta_registry::{AliasInfo, Registry, RegistryError, split_qname};

/// Initialize a schema registry from a configuration.
///
/// With the default configuration the registry comes seeded with the standard
/// namespaces and aliases.
///
/// # Errors
/// Returns an error if seeding fails validation; the standard seed itself
/// always passes.
pub fn init(config: &RegistryConfig) -> Result<Registry, RegistryError> {
    Registry::builder().config(config.clone()).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_seeds_from_default_config() {
        let registry = init(&RegistryConfig::default()).unwrap();
        assert!(registry.namespace_count() > 0);
        assert!(registry.find_alias("xmp:Author").is_some());
    }

    #[test]
    fn init_honors_config_from_json() {
        let config: RegistryConfig =
            serde_json::from_str(r#"{ "seed_defaults": false }"#).unwrap();
        let registry = init(&config).unwrap();
        assert_eq!(registry.namespace_count(), 0);
        assert_eq!(registry.alias_count(), 0);
    }
}
