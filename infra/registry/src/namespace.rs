use crate::error::RegistryError;
use fxhash::FxHashMap;

/// Outcome of a namespace registration, so callers can tell a fresh binding
/// from an idempotent hit on an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NamespaceRegistration {
    /// The URI was already registered; the existing prefix is returned and
    /// the suggestion was ignored.
    Existing(String),
    /// The URI was newly bound to this prefix (suggested or derived).
    Fresh(String),
}

impl NamespaceRegistration {
    pub(crate) fn into_prefix(self) -> String {
        match self {
            Self::Existing(prefix) | Self::Fresh(prefix) => prefix,
        }
    }
}

/// Bidirectional URI ↔ prefix table.
///
/// Invariant: `by_uri` and `by_prefix` are exact mutual inverses. Every write
/// path updates both maps inside the same `&mut self` call, so no reader can
/// observe one direction without the other.
#[derive(Debug, Default)]
pub(crate) struct NamespaceTable {
    by_uri: FxHashMap<String, String>,
    by_prefix: FxHashMap<String, String>,
}

impl NamespaceTable {
    /// Registers `uri` under `suggested_prefix`, deriving `prefix2`,
    /// `prefix3`, … when the suggestion is already bound to a different URI.
    ///
    /// Re-registering a known URI is not an error: the existing prefix wins
    /// and the suggestion is ignored.
    pub(crate) fn register(
        &mut self,
        uri: &str,
        suggested_prefix: &str,
    ) -> Result<NamespaceRegistration, RegistryError> {
        if uri.is_empty() {
            return Err(RegistryError::InvalidParameter {
                message: "Namespace URI cannot be empty".into(),
                context: None,
            });
        }
        if suggested_prefix.is_empty() {
            return Err(RegistryError::InvalidParameter {
                message: "Suggested prefix cannot be empty".into(),
                context: Some(format!("uri={uri}").into()),
            });
        }

        if let Some(existing) = self.by_uri.get(uri) {
            return Ok(NamespaceRegistration::Existing(existing.clone()));
        }

        let prefix = if self.by_prefix.contains_key(suggested_prefix) {
            self.derive_prefix(suggested_prefix)
        } else {
            suggested_prefix.to_owned()
        };

        self.by_uri.insert(uri.to_owned(), prefix.clone());
        self.by_prefix.insert(prefix.clone(), uri.to_owned());

        Ok(NamespaceRegistration::Fresh(prefix))
    }

    fn derive_prefix(&self, suggested: &str) -> String {
        let mut n: u32 = 2;
        loop {
            let candidate = format!("{suggested}{n}");
            if !self.by_prefix.contains_key(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    pub(crate) fn prefix_for(&self, uri: &str) -> Option<&str> {
        self.by_uri.get(uri).map(String::as_str)
    }

    pub(crate) fn uri_for(&self, prefix: &str) -> Option<&str> {
        self.by_prefix.get(prefix).map(String::as_str)
    }

    /// Removes both directions of the binding. Empty or unknown URIs are a
    /// no-op; the return value reports whether anything was removed.
    pub(crate) fn delete(&mut self, uri: &str) -> bool {
        if uri.is_empty() {
            return false;
        }
        let Some(prefix) = self.by_uri.remove(uri) else {
            return false;
        };
        self.by_prefix.remove(&prefix);
        true
    }

    /// Snapshot keyed by URI.
    pub(crate) fn namespaces(&self) -> FxHashMap<String, String> {
        self.by_uri.clone()
    }

    /// Snapshot keyed by prefix.
    pub(crate) fn prefixes(&self) -> FxHashMap<String, String> {
        self.by_prefix.clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.by_uri.len()
    }
}
