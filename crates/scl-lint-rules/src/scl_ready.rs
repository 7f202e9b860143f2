//! Validation rules for SCL-ready package specs.
//!
//! An SCL-ready package builds conditionally against a collection: its
//! name must carry the `%{?scl_prefix}` macro and it should define
//! `%pkg_name` for builds outside the collection.

use scl_lint_core::{patterns, Diagnostic, SclReadyFacts, SclReadyRule};

/// Emitted when the `%{!?scl: %define pkg_name %{name}}` guard is absent.
pub const MISSING_PKG_NAME: &str = "missing-pkg_name-definition";
/// Emitted when the package name lacks the `%{scl_prefix}` macro.
pub const NAME_WITHOUT_PREFIX: &str = "name-without-scl-prefix";
/// Emitted when the prefix is present but not in the conditional form.
pub const NAME_PREFIX_UNCONDITIONAL: &str = "name-with-scl-prefix-without-condition";

/// Requires the `pkg_name` guard definition somewhere in the spec.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequirePkgNameGuard;

impl SclReadyRule for RequirePkgNameGuard {
    fn name(&self) -> &'static str {
        "require-pkg-name-guard"
    }

    fn description(&self) -> &'static str {
        "An SCL-ready package should define %pkg_name for non-SCL builds"
    }

    fn diagnostics(&self) -> &'static [&'static str] {
        &[MISSING_PKG_NAME]
    }

    fn check(&self, facts: &SclReadyFacts) -> Vec<Diagnostic> {
        if facts.pkg_name_guard {
            Vec::new()
        } else {
            vec![Diagnostic::warning(MISSING_PKG_NAME)]
        }
    }
}

/// Requires the conditional SCL prefix in the package name.
///
/// A missing prefix is an error; an unconditional prefix is a warning,
/// since the package would fail to build outside the SCL context.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameRequiresSclPrefix;

impl SclReadyRule for NameRequiresSclPrefix {
    fn name(&self) -> &'static str {
        "name-requires-scl-prefix"
    }

    fn description(&self) -> &'static str {
        "The package name must start with the conditional %{?scl_prefix}"
    }

    fn diagnostics(&self) -> &'static [&'static str] {
        &[NAME_WITHOUT_PREFIX, NAME_PREFIX_UNCONDITIONAL]
    }

    fn check(&self, facts: &SclReadyFacts) -> Vec<Diagnostic> {
        let name = facts.name.as_deref().unwrap_or("");
        let p = patterns();
        if !p.scl_prefix.is_match(name) {
            vec![Diagnostic::error(NAME_WITHOUT_PREFIX)]
        } else if !p.scl_prefix_conditional.is_match(name) {
            vec![Diagnostic::warning(NAME_PREFIX_UNCONDITIONAL)]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scl_lint_core::Severity;

    fn facts(name: Option<&str>, pkg_name_guard: bool) -> SclReadyFacts {
        SclReadyFacts {
            name: name.map(ToString::to_string),
            pkg_name_guard,
        }
    }

    #[test]
    fn guard_present_is_silent() {
        assert!(RequirePkgNameGuard
            .check(&facts(Some("%{?scl_prefix}nodejs-foo"), true))
            .is_empty());
    }

    #[test]
    fn guard_absent_is_a_warning() {
        let diagnostics = RequirePkgNameGuard.check(&facts(None, false));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].name, MISSING_PKG_NAME);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
    }

    #[test]
    fn name_without_prefix_is_an_error() {
        let diagnostics = NameRequiresSclPrefix.check(&facts(Some("nodejs-foo"), true));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].name, NAME_WITHOUT_PREFIX);
        assert_eq!(diagnostics[0].severity, Severity::Error);
    }

    #[test]
    fn missing_name_counts_as_missing_prefix() {
        let diagnostics = NameRequiresSclPrefix.check(&facts(None, true));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].name, NAME_WITHOUT_PREFIX);
    }

    #[test]
    fn unconditional_prefix_is_a_warning() {
        let diagnostics =
            NameRequiresSclPrefix.check(&facts(Some("%{scl_prefix}nodejs-foo"), true));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].name, NAME_PREFIX_UNCONDITIONAL);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
    }

    #[test]
    fn conditional_prefix_is_silent() {
        assert!(NameRequiresSclPrefix
            .check(&facts(Some("%{?scl_prefix}nodejs-foo"), true))
            .is_empty());
    }
}
