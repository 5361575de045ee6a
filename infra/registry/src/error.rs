//! # Registry Errors
//!
//! This module defines the [`RegistryError`] enum used by mutating registry
//! operations. Lookups never raise errors; absence is reported as `None` or
//! an empty collection.

use std::borrow::Cow;

/// A specialized [`RegistryError`] enum for registry mutation failures.
///
/// Every failing mutation leaves the registry unchanged.
#[xmeta_derive::xmeta_error]
pub enum RegistryError {
    /// A required string argument was empty.
    #[error("Invalid parameter{}: {message}", format_context(.context))]
    InvalidParameter { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// An alias or actual property was given as a path expression rather than
    /// a simple name.
    #[error("Invalid alias form{}: {message}", format_context(.context))]
    InvalidAliasForm { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// An existing alias key was re-registered with a different target, or a
    /// registration would chain one alias onto another.
    #[error("Inconsistent alias{}: {message}", format_context(.context))]
    InconsistentAlias { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal registry error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
