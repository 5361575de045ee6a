use crate::engine::Registry;
use crate::error::RegistryError;
use xmeta_domain::config::RegistryConfig;
use xmeta_domain::constants::{DEFAULT_ALIASES, DEFAULT_NAMESPACES};
use xmeta_domain::forms::ArrayForm;

/// A builder for configuring and seeding a [`Registry`].
///
/// Seeding runs through the public registration operations on the not-yet-
/// shared registry, so defaults obey exactly the same uniqueness and
/// validation rules as later caller-driven registrations.
///
/// ### Example
/// ```rust
/// use xmeta_registry::Registry;
///
/// # fn main() -> Result<(), xmeta_registry::RegistryError> {
/// let registry = Registry::builder()
///     .namespace("http://ns.example.com/scan/1.0/", "scan")
///     .build()?;
///
/// assert_eq!(registry.prefix_for("http://ns.example.com/scan/1.0/").as_deref(), Some("scan"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    config: RegistryConfig,
    extra_namespaces: Vec<(String, String)>,
    extra_aliases: Vec<(String, String, String, String, ArrayForm)>,
}

impl RegistryBuilder {
    /// Creates a builder with the default configuration: defaults seeded,
    /// strict alias-chain checking on.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    #[must_use = "The builder must be built before it produces a registry."]
    pub fn config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    /// Toggles seeding of the standard namespaces and aliases.
    #[must_use = "The builder must be built before it produces a registry."]
    pub const fn seed_defaults(mut self, enabled: bool) -> Self {
        self.config.seed_defaults = enabled;
        self
    }

    /// Toggles rejection of alias registrations whose actual target is
    /// itself an alias key.
    #[must_use = "The builder must be built before it produces a registry."]
    pub const fn strict_alias_chains(mut self, enabled: bool) -> Self {
        self.config.strict_alias_chains = enabled;
        self
    }

    /// Adds a namespace to seed after the defaults.
    #[must_use = "The builder must be built before it produces a registry."]
    pub fn namespace(mut self, uri: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.extra_namespaces.push((uri.into(), prefix.into()));
        self
    }

    /// Adds an alias to seed after the defaults.
    #[must_use = "The builder must be built before it produces a registry."]
    pub fn alias(
        mut self,
        alias_ns: impl Into<String>,
        alias_prop: impl Into<String>,
        actual_ns: impl Into<String>,
        actual_prop: impl Into<String>,
        form: ArrayForm,
    ) -> Self {
        self.extra_aliases.push((
            alias_ns.into(),
            alias_prop.into(),
            actual_ns.into(),
            actual_prop.into(),
            form,
        ));
        self
    }

    /// Builds and seeds the registry.
    ///
    /// # Errors
    /// Returns the underlying [`RegistryError`] if any seed entry fails
    /// validation; the standard seed itself always passes.
    pub fn build(self) -> Result<Registry, RegistryError> {
        let registry = Registry::bare(self.config.strict_alias_chains);

        if self.config.seed_defaults {
            for (uri, prefix) in DEFAULT_NAMESPACES {
                registry.register_namespace(uri, prefix)?;
            }
            for (alias_ns, alias_prop, actual_ns, actual_prop, form) in DEFAULT_ALIASES {
                registry.register_alias(alias_ns, alias_prop, actual_ns, actual_prop, *form)?;
            }
        }

        for (uri, prefix) in &self.extra_namespaces {
            registry.register_namespace(uri, prefix)?;
        }
        for (alias_ns, alias_prop, actual_ns, actual_prop, form) in &self.extra_aliases {
            registry.register_alias(alias_ns, alias_prop, actual_ns, actual_prop, *form)?;
        }

        Ok(registry)
    }
}
