use crate::alias::{AliasRegistration, AliasTable};
use crate::builder::RegistryBuilder;
use crate::error::RegistryError;
use crate::namespace::{NamespaceRegistration, NamespaceTable};
use crate::types::{AliasInfo, split_qname};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, trace, warn};
use xmeta_domain::forms::ArrayForm;

#[derive(Debug)]
pub(crate) struct RegistryInner {
    namespaces: RwLock<NamespaceTable>,
    aliases: RwLock<AliasTable>,
    strict_alias_chains: bool,
}

/// A thread-safe schema registry.
///
/// `Registry` is the single facade over the namespace table and the alias
/// table. It wraps the shared state in an [`Arc`], making it cheaply clonable
/// and safe to hand to parsers and serializers running on parallel threads.
///
/// ### Locking
/// Each table sits behind its own [`RwLock`]: lookups run concurrently,
/// mutations are exclusive per table. No operation writes both tables inside
/// one critical section, and cross-table reads take the two read locks
/// sequentially, so lock ordering can never deadlock.
///
/// ### Example
/// ```rust
/// use xmeta_registry::Registry;
///
/// # fn main() -> Result<(), xmeta_registry::RegistryError> {
/// let registry = Registry::builder().build()?;
///
/// let prefix = registry.register_namespace("http://ns.example.com/print/1.0/", "print")?;
/// assert_eq!(prefix, "print");
/// assert_eq!(registry.prefix_for("http://ns.adobe.com/xap/1.0/").as_deref(), Some("xmp"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    inner: Arc<RegistryInner>,
}

impl Default for Registry {
    /// An empty registry with strict alias-chain checking and no seed.
    fn default() -> Self {
        Self::bare(true)
    }
}

impl Registry {
    /// Returns a new [`RegistryBuilder`], the usual way to obtain a seeded
    /// registry.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub(crate) fn bare(strict_alias_chains: bool) -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                namespaces: RwLock::new(NamespaceTable::default()),
                aliases: RwLock::new(AliasTable::default()),
                strict_alias_chains,
            }),
        }
    }

    // --- Namespace operations ---

    /// Registers a namespace URI with a suggested prefix and returns the
    /// prefix actually bound.
    ///
    /// Re-registering a known URI returns its existing prefix and ignores the
    /// suggestion. When the suggestion is taken by a different URI, a unique
    /// prefix is derived by appending `2`, `3`, … to it. Both directions of
    /// the bijection are updated in one exclusive critical section.
    ///
    /// # Errors
    /// Returns [`RegistryError::InvalidParameter`] if `uri` or
    /// `suggested_prefix` is empty.
    pub fn register_namespace(
        &self,
        uri: &str,
        suggested_prefix: &str,
    ) -> Result<String, RegistryError> {
        let result = self.inner.namespaces.write().register(uri, suggested_prefix);
        match &result {
            Ok(NamespaceRegistration::Fresh(prefix)) => {
                debug!(uri, prefix, "registered namespace");
            },
            Ok(NamespaceRegistration::Existing(prefix)) => {
                trace!(uri, prefix, "namespace already registered");
            },
            Err(err) => warn!(uri, %err, "namespace registration rejected"),
        }
        result.map(NamespaceRegistration::into_prefix)
    }

    /// The prefix registered for `uri`, or `None`. Never fails.
    #[must_use]
    pub fn prefix_for(&self, uri: &str) -> Option<String> {
        self.inner.namespaces.read().prefix_for(uri).map(str::to_owned)
    }

    /// The URI registered for `prefix`, or `None`. Never fails.
    #[must_use]
    pub fn uri_for(&self, prefix: &str) -> Option<String> {
        self.inner.namespaces.read().uri_for(prefix).map(str::to_owned)
    }

    /// Snapshot of the full bijection keyed by URI.
    ///
    /// The snapshot is an independent copy: later registry mutations do not
    /// change it.
    #[must_use]
    pub fn namespaces(&self) -> FxHashMap<String, String> {
        self.inner.namespaces.read().namespaces()
    }

    /// Snapshot of the full bijection keyed by prefix.
    #[must_use]
    pub fn prefixes(&self) -> FxHashMap<String, String> {
        self.inner.namespaces.read().prefixes()
    }

    /// Number of registered namespaces.
    #[must_use]
    pub fn namespace_count(&self) -> usize {
        self.inner.namespaces.read().len()
    }

    /// Deletes a namespace, removing both directions of the binding.
    ///
    /// A no-op for empty or unregistered URIs. Aliases living in a deleted
    /// namespace stay registered and resolvable by URI; they only drop out of
    /// the qname-keyed [`Registry::aliases`] snapshot until the namespace is
    /// registered again.
    pub fn delete_namespace(&self, uri: &str) {
        if self.inner.namespaces.write().delete(uri) {
            debug!(uri, "deleted namespace");
        }
    }

    // --- Alias operations ---

    /// Associates an alias name with an actual name.
    ///
    /// Both property names must be simple names. Re-registering an identical
    /// definition is a no-op success; a different target for an existing key
    /// is rejected. With strict chain checking (the default), registrations
    /// that would chain aliases in either direction are rejected: an actual
    /// that is itself a registered alias, and an alias key that is already
    /// the target of an existing alias.
    ///
    /// # Errors
    /// * [`RegistryError::InvalidParameter`] for empty arguments.
    /// * [`RegistryError::InvalidAliasForm`] for path-expression property names.
    /// * [`RegistryError::InconsistentAlias`] for conflicting or chained
    ///   definitions; the existing definition is left untouched.
    pub fn register_alias(
        &self,
        alias_ns: &str,
        alias_prop: &str,
        actual_ns: &str,
        actual_prop: &str,
        form: ArrayForm,
    ) -> Result<(), RegistryError> {
        let result = self.inner.aliases.write().register(
            alias_ns,
            alias_prop,
            actual_ns,
            actual_prop,
            form,
            self.inner.strict_alias_chains,
        );
        match &result {
            Ok(AliasRegistration::Inserted) => {
                debug!(alias_ns, alias_prop, actual_ns, actual_prop, "registered alias");
            },
            Ok(AliasRegistration::AlreadyRegistered) => {
                trace!(alias_ns, alias_prop, "alias already registered");
            },
            Err(err) => warn!(alias_ns, alias_prop, %err, "alias registration rejected"),
        }
        result.map(|_| ())
    }

    /// Determines whether `(alias_ns, alias_prop)` is an alias and what it is
    /// aliased to. Never fails.
    #[must_use]
    pub fn resolve_alias(&self, alias_ns: &str, alias_prop: &str) -> Option<Arc<AliasInfo>> {
        self.inner.aliases.read().resolve(alias_ns, alias_prop)
    }

    /// Looks up an alias by qualified name (`prefix:local`).
    ///
    /// The prefix is resolved through the namespace table first; an unknown
    /// prefix or a malformed qname yields `None`.
    #[must_use]
    pub fn find_alias(&self, qname: &str) -> Option<Arc<AliasInfo>> {
        let (prefix, local) = split_qname(qname)?;
        let uri = self.uri_for(prefix)?;
        self.inner.aliases.read().resolve(&uri, local)
    }

    /// Every alias whose alias-side namespace equals `ns`; empty if none.
    ///
    /// See [`Registry::find_aliases_by_actual`] for the actual-side variant.
    #[must_use]
    pub fn find_aliases(&self, ns: &str) -> Vec<Arc<AliasInfo>> {
        self.inner.aliases.read().in_namespace(ns)
    }

    /// Every alias whose actual-side namespace equals `ns`; empty if none.
    #[must_use]
    pub fn find_aliases_by_actual(&self, ns: &str) -> Vec<Arc<AliasInfo>> {
        self.inner.aliases.read().targeting(ns)
    }

    /// Deletes an alias registration.
    ///
    /// Only the registration is removed, never the actual property it pointed
    /// to. Absent keys are a no-op.
    pub fn delete_alias(&self, alias_ns: &str, alias_prop: &str) {
        if self.inner.aliases.write().delete(alias_ns, alias_prop) {
            debug!(alias_ns, alias_prop, "deleted alias");
        }
    }

    /// Number of registered aliases.
    #[must_use]
    pub fn alias_count(&self) -> usize {
        self.inner.aliases.read().len()
    }

    /// Snapshot of the whole alias table keyed by the alias's qualified name
    /// (`prefix:alias_prop`).
    ///
    /// Aliases whose namespace has no registered prefix — possible after
    /// [`Registry::delete_namespace`] — are skipped. The snapshot is an
    /// independent copy.
    #[must_use]
    pub fn aliases(&self) -> FxHashMap<String, Arc<AliasInfo>> {
        // Copy the prefix view first so the alias read lock is never held
        // while touching the namespace lock.
        let prefixes_by_uri = self.inner.namespaces.read().namespaces();

        let aliases = self.inner.aliases.read();
        aliases
            .entries()
            .filter_map(|info| {
                let prefix = prefixes_by_uri.get(&info.alias_ns)?;
                Some((format!("{prefix}:{}", info.alias_prop), Arc::clone(info)))
            })
            .collect()
    }
}
