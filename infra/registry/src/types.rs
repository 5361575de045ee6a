use serde::{Deserialize, Serialize};
use std::fmt;
use xmeta_domain::forms::ArrayForm;

/// A resolved alias definition.
///
/// Both sides are carried in full so that callers holding an `AliasInfo` never
/// need a second lookup to learn where the alias came from or where it points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AliasInfo {
    /// Namespace URI the alias name lives in.
    pub alias_ns: String,
    /// Simple property name of the alias.
    pub alias_prop: String,
    /// Namespace URI of the actual property.
    pub actual_ns: String,
    /// Simple property name of the actual property.
    pub actual_prop: String,
    /// How the alias relates to an array on the actual side.
    pub array_form: ArrayForm,
}

impl AliasInfo {
    /// Whether this definition maps the given key.
    #[must_use]
    pub fn matches(&self, alias_ns: &str, alias_prop: &str) -> bool {
        self.alias_ns == alias_ns && self.alias_prop == alias_prop
    }

    /// Whether two definitions for the same key describe the same target.
    #[must_use]
    pub fn same_target(&self, actual_ns: &str, actual_prop: &str, form: ArrayForm) -> bool {
        self.actual_ns == actual_ns && self.actual_prop == actual_prop && self.array_form == form
    }
}

impl fmt::Display for AliasInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} -> {}{}",
            self.alias_ns, self.alias_prop, self.actual_ns, self.actual_prop
        )
    }
}

/// Splits a qualified name into `(prefix, local)` at the first `:`.
///
/// Returns `None` if the separator is missing or either half is empty.
#[must_use]
pub fn split_qname(qname: &str) -> Option<(&str, &str)> {
    let (prefix, local) = qname.split_once(':')?;
    (!prefix.is_empty() && !local.is_empty()).then_some((prefix, local))
}

/// Checks the "simple name" shape: non-empty and free of path-expression
/// syntax (structure, array, qualifier and qname delimiters) and whitespace.
#[must_use]
pub(crate) fn is_simple_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| matches!(c, '/' | '[' | ']' | '*' | '@' | '?' | ':') || c.is_whitespace())
}
