//! A thread-safe schema registry for structured-metadata namespaces and
//! property aliases.
//!
//! The registry tracks two cooperating tables behind one facade:
//!
//! * the **namespace table**, a bidirectional mapping between namespace URIs
//!   and short prefixes, owning the prefix-uniqueness algorithm, and
//! * the **alias table**, mapping alias property names onto the actual
//!   properties they stand for, including the array form of the target.
//!
//! Parsers register the namespaces and aliases they discover and resolve
//! names while building property trees; serializers ask for prefixes when
//! rendering output. The registry itself performs no parsing, serialization
//! or document validation — names are opaque strings subject only to simple-
//! name shape checks.
//!
//! ## Contracts
//!
//! * Lookups never fail: absence is `None` or an empty collection.
//! * Mutations are idempotent on identical input and fail fast without
//!   partial writes on invalid input.
//! * All string comparison is exact: no normalization, no case folding.
//! * Returned collections are independent snapshots.
//!
//! ## Example
//!
//! ```rust
//! use xmeta_registry::prelude::*;
//! use xmeta_domain::constants::NS_XMP;
//!
//! # fn main() -> Result<(), RegistryError> {
//! let registry = Registry::builder().build()?;
//!
//! // Standard seed is present.
//! assert_eq!(registry.prefix_for(NS_XMP).as_deref(), Some("xmp"));
//!
//! // A colliding suggestion gets a derived prefix.
//! let prefix = registry.register_namespace("http://ns.example.com/custom/1.0/", "xmp")?;
//! assert_eq!(prefix, "xmp2");
//!
//! // Aliases resolve by key or by qualified name.
//! let info = registry.find_alias("xmp:Author").expect("standard alias");
//! assert_eq!(info.actual_prop, "creator");
//! # Ok(())
//! # }
//! ```

mod alias;
mod builder;
mod engine;
mod error;
mod namespace;
mod types;

pub use builder::RegistryBuilder;
pub use engine::Registry;
pub use error::{RegistryError, RegistryErrorExt};
pub use types::{AliasInfo, split_qname};
pub use xmeta_domain::forms::{ArrayForm, PropertyFlags};

pub mod prelude {
    pub use crate::builder::RegistryBuilder;
    pub use crate::engine::Registry;
    pub use crate::error::{RegistryError, RegistryErrorExt};
    pub use crate::types::AliasInfo;
    pub use xmeta_domain::forms::ArrayForm;
}
