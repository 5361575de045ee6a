use crate::error::RegistryError;
use crate::types::{AliasInfo, is_simple_name};
use fxhash::FxHashMap;
use std::sync::Arc;
use xmeta_domain::forms::ArrayForm;

/// Outcome of an alias registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AliasRegistration {
    /// The definition was newly inserted.
    Inserted,
    /// An identical definition was already present; nothing changed.
    AlreadyRegistered,
}

/// Table of alias definitions, bucketed by alias namespace and keyed by the
/// simple alias name inside each bucket.
///
/// The two-level layout lets every lookup and delete borrow its arguments
/// instead of allocating a composite key. Definitions are stored behind `Arc`
/// so lookups and snapshots hand out shared, immutable views without copying
/// the strings.
#[derive(Debug, Default)]
pub(crate) struct AliasTable {
    entries: FxHashMap<String, FxHashMap<String, Arc<AliasInfo>>>,
}

impl AliasTable {
    /// Inserts an alias definition after validating its shape.
    ///
    /// Identical re-registration is a no-op success. Re-registration with a
    /// different target fails and leaves the original definition in place.
    /// With `strict_chains`, registrations that would chain aliases in either
    /// direction are rejected: an actual that is itself an alias key, and a
    /// key that is already the target of an existing alias.
    pub(crate) fn register(
        &mut self,
        alias_ns: &str,
        alias_prop: &str,
        actual_ns: &str,
        actual_prop: &str,
        form: ArrayForm,
        strict_chains: bool,
    ) -> Result<AliasRegistration, RegistryError> {
        Self::require_non_empty(alias_ns, "alias namespace")?;
        Self::require_non_empty(actual_ns, "actual namespace")?;
        Self::require_simple(alias_prop, "alias property")?;
        Self::require_simple(actual_prop, "actual property")?;

        if let Some(existing) = self.entries.get(alias_ns).and_then(|bucket| bucket.get(alias_prop))
        {
            if existing.same_target(actual_ns, actual_prop, form) {
                return Ok(AliasRegistration::AlreadyRegistered);
            }
            return Err(RegistryError::InconsistentAlias {
                message: format!("{alias_ns}{alias_prop} already maps to {existing}").into(),
                context: None,
            });
        }

        if strict_chains {
            if self.entries.get(actual_ns).is_some_and(|bucket| bucket.contains_key(actual_prop)) {
                return Err(RegistryError::InconsistentAlias {
                    message: format!("actual {actual_ns}{actual_prop} is itself an alias").into(),
                    context: Some("aliases must not chain".into()),
                });
            }
            let targeted = self
                .entries()
                .any(|info| info.actual_ns == alias_ns && info.actual_prop == alias_prop);
            if targeted {
                return Err(RegistryError::InconsistentAlias {
                    message: format!("{alias_ns}{alias_prop} is the target of an existing alias")
                        .into(),
                    context: Some("aliases must not chain".into()),
                });
            }
        }

        let info = Arc::new(AliasInfo {
            alias_ns: alias_ns.to_owned(),
            alias_prop: alias_prop.to_owned(),
            actual_ns: actual_ns.to_owned(),
            actual_prop: actual_prop.to_owned(),
            array_form: form,
        });
        self.entries.entry(alias_ns.to_owned()).or_default().insert(alias_prop.to_owned(), info);

        Ok(AliasRegistration::Inserted)
    }

    fn require_non_empty(value: &str, what: &'static str) -> Result<(), RegistryError> {
        if value.is_empty() {
            return Err(RegistryError::InvalidParameter {
                message: format!("{what} cannot be empty").into(),
                context: None,
            });
        }
        Ok(())
    }

    fn require_simple(name: &str, what: &'static str) -> Result<(), RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::InvalidParameter {
                message: format!("{what} cannot be empty").into(),
                context: None,
            });
        }
        if !is_simple_name(name) {
            return Err(RegistryError::InvalidAliasForm {
                message: format!("{what} must be a simple name, got '{name}'").into(),
                context: None,
            });
        }
        Ok(())
    }

    pub(crate) fn resolve(&self, alias_ns: &str, alias_prop: &str) -> Option<Arc<AliasInfo>> {
        self.entries.get(alias_ns).and_then(|bucket| bucket.get(alias_prop)).cloned()
    }

    /// Every definition whose alias-side namespace equals `ns`.
    pub(crate) fn in_namespace(&self, ns: &str) -> Vec<Arc<AliasInfo>> {
        self.entries
            .get(ns)
            .map(|bucket| bucket.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Every definition whose actual-side namespace equals `ns`.
    pub(crate) fn targeting(&self, ns: &str) -> Vec<Arc<AliasInfo>> {
        self.entries().filter(|info| info.actual_ns == ns).cloned().collect()
    }

    /// Removes the definition for the key. Absent keys are a no-op; the
    /// return value reports whether anything was removed. Emptied namespace
    /// buckets are pruned.
    pub(crate) fn delete(&mut self, alias_ns: &str, alias_prop: &str) -> bool {
        let Some(bucket) = self.entries.get_mut(alias_ns) else {
            return false;
        };
        let removed = bucket.remove(alias_prop).is_some();
        if removed && bucket.is_empty() {
            self.entries.remove(alias_ns);
        }
        removed
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = &Arc<AliasInfo>> {
        self.entries.values().flat_map(FxHashMap::values)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.values().map(FxHashMap::len).sum()
    }
}
