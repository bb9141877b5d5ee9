//! Layered field-level defaulting for sparse Pulsar cluster specs. Hand in
//! any subset of the configuration tree, get back a fully populated one.
//!
//! Specfill resolves the global spec of a Pulsar-cluster Kubernetes operator:
//! the user writes only the fields they care about, at any nesting depth, and
//! [`resolve`] fills every unset field with its canonical default while
//! leaving every user-set field — including an explicit `false` or `""` —
//! untouched.
//!
//! ```ignore
//! let mut spec = specfill::from_yaml(&manifest)?;
//! specfill::resolve(&mut spec);
//! ```
//!
//! That pair of calls turns a two-line manifest into a complete spec: the
//! cluster domain, component base names, storage selection, TLS switches,
//! and the full auth subtree are all populated.
//!
//! # Design: absence is a state, not a value
//!
//! Every field in [`GlobalSpec`] and its nested configs is an `Option<T>`.
//! `None` means the user never supplied the field; `Some(false)` and
//! `Some("")` mean they did. The resolver decides what to fill purely by
//! nullity, never by truthiness, so a user who explicitly disables
//! persistence or empties a role list keeps exactly what they wrote. This is
//! the single property the whole crate exists to protect.
//!
//! Because coalescing only ever fills `None` slots, [`resolve`] is
//! idempotent: running it twice produces the same tree as running it once.
//!
//! # Precedence
//!
//! ```text
//! Canonical defaults     defaults::* constants and templates
//!        ↑ overridden by
//! User document          any subset of fields, any depth
//! ```
//!
//! The user layer is **sparse**. Unset keys fall through to the default
//! layer key-by-key; a document that sets `tls.enabled` still gets the
//! stock `tls.defaultSecretName`.
//!
//! # Two kinds of defaulting
//!
//! Composite fields with real policy — storage's either/or branches, TLS's
//! two-field coalesce, the component base names — get bespoke rules in
//! [`resolve`]. Composite types that are just a bag of sibling scalar fields
//! go through [`merge_defaults`] instead: a shallow, serde-driven pass that
//! copies every absent field from a freshly built template without a
//! hand-written rule per field. The shallow pass never descends into nested
//! configs; the resolver walks the auth subtree explicitly, one level at a
//! time, down to the rbac leaf.
//!
//! Templates are constructed fresh on every call (see the [`defaults`]
//! module), so default role lists are never shared between two resolved
//! trees.
//!
//! # What is deliberately not defaulted
//!
//! Pass-through fields (`name`, `image`, `dnsConfig`, `nodeSelectors`) and
//! the per-component TLS entries are left exactly as written, even when TLS
//! is enabled. Resolving those belongs to the surrounding operator, as does
//! real schema validation — the [`Validable`] hook here is a no-op seam.
//!
//! # Parsing and strict mode
//!
//! [`from_yaml`] / [`from_json`] turn a user document into a sparse spec,
//! ignoring unknown keys. The `_strict` variants reject them instead,
//! reporting every unknown dotted path in one [`SpecError::UnknownKeys`] so
//! a typo'd manifest surfaces all its mistakes at once. Input is always an
//! in-memory string; the crate performs no I/O and holds no state across
//! calls.
//!
//! # Error handling
//!
//! All fallible operations return [`SpecError`]. Only parsing can fail; the
//! resolver itself never does for well-typed input. A structural mismatch
//! inside the generic merge is a bug in calling code and panics rather than
//! surfacing as a recoverable error.

pub mod defaults;
pub mod error;
pub mod spec;

mod merge;
mod parse;
mod resolve;
mod validate;

pub use error::SpecError;
pub use merge::merge_defaults;
pub use parse::{from_json, from_json_strict, from_yaml, from_yaml_strict};
pub use resolve::resolve;
pub use spec::{
    AuthConfig, Components, GlobalSpec, GlobalStorageConfig, ProvisionerConfig, RbacConfig,
    StorageClassConfig, TlsConfig, TlsEntryConfig, TokenConfig,
};
pub use validate::{Validable, ValidationContext};
