use serde::Deserialize;

/// Registry construction knobs shared across services.
///
/// This is plain data; loading it from files or the environment is the
/// caller's concern.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Seed the standard namespaces and aliases during construction.
    pub seed_defaults: bool,
    /// Reject alias registrations whose actual target is itself an alias key.
    pub strict_alias_chains: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { seed_defaults: true, strict_alias_chains: true }
    }
}
