use xmeta_registry::prelude::*;

/// Initializes a registry seeded with the standard namespaces and aliases.
/// # Panics
/// * If the standard seed fails to register, the function will panic.
#[must_use]
pub fn seeded_registry() -> Registry {
    Registry::builder().build().expect("Registry setup failed")
}

/// Initializes an empty registry with strict alias-chain checking.
#[must_use]
pub fn empty_registry() -> Registry {
    Registry::builder().seed_defaults(false).build().expect("Registry setup failed")
}
