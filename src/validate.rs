//! Validation hook for resolved specs.
//!
//! The crate only defines the seam: a [`Validable`] trait whose default
//! implementation accepts everything, plus a [`ValidationContext`] that
//! collects dotted-path diagnostics. Real schema validation belongs to the
//! surrounding operator; [`GlobalSpec`]'s implementation is the hard-coded
//! "always valid".

use crate::spec::GlobalSpec;

/// Collects validation diagnostics as `path: message` entries.
#[derive(Debug, Default)]
pub struct ValidationContext {
    violations: Vec<String>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one violation against a dotted field path.
    pub fn violation(&mut self, path: &str, message: &str) {
        self.violations.push(format!("{path}: {message}"));
    }

    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// A config node that can be checked after resolution.
///
/// The default implementation accepts every node without touching the
/// context. Implementors that do real checks should record a violation for
/// each problem and return `false` when any was recorded.
pub trait Validable {
    fn is_valid(&self, _ctx: &mut ValidationContext) -> bool {
        true
    }
}

impl Validable for GlobalSpec {}
