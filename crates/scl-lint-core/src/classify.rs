//! Package-role classification for spec files.

use crate::patterns::patterns;

/// The role a spec file plays with respect to the SCL convention.
///
/// Computed once per spec, in a fixed priority, and never revisited
/// within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Defines a collection (`%define`/`%global scl ...`): the metapackage
    /// rule engine applies.
    Metapackage,
    /// Calls `%{?scl: %scl_package ...}`: the SCL-ready rule engine applies.
    SclReady,
    /// Uses `%scl*` macros without either declaring form; almost certainly
    /// an author error, reported as `undeclared-scl` and analyzed no
    /// further.
    UndeclaredUse,
    /// No SCL markers at all; analysis is silent.
    Unrelated,
}

/// Classifies whole-file spec text.
///
/// Priority is fixed: an `scl` definition wins over an `%scl_package`
/// call, which wins over bare macro use.
#[must_use]
pub fn classify(text: &str) -> Classification {
    let p = patterns();
    if p.scl_definition.is_match(text) {
        Classification::Metapackage
    } else if p.scl_package_call.is_match(text) {
        Classification::SclReady
    } else if p.scl_macro_use.is_match(text) {
        Classification::UndeclaredUse
    } else {
        Classification::Unrelated
    }
}
