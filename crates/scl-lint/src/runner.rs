//! Wiring of the default catalog and rule sets into a ready-to-use checker.
//!
//! The checker has no load-time side effects: the host process calls
//! [`default_checker`] explicitly and registers the result into whatever
//! checker registry it owns.

use scl_lint_core::{default_catalog, CheckError, LintResult, Package, SclCheck};
use scl_lint_rules::presets;
use std::path::Path;
use tracing::debug;

/// Builds a checker with the built-in catalog and the full rule sets.
///
/// # Errors
///
/// Returns [`CheckError::Catalog`] or [`CheckError::UnknownDiagnostic`] if
/// the built-in catalog or a built-in rule is inconsistent, either of which
/// is a defect in this crate.
pub fn default_checker() -> Result<SclCheck, CheckError> {
    let mut builder = SclCheck::builder().catalog(default_catalog()?);
    for rule in presets::metapackage_rules() {
        builder = builder.metapackage_rule_box(rule);
    }
    for rule in presets::scl_ready_rules() {
        builder = builder.scl_ready_rule_box(rule);
    }

    let checker = builder.build()?;
    debug!(rules = checker.rule_count(), "built default checker");
    Ok(checker)
}

/// Checks a single spec file's text with the default checker.
///
/// # Errors
///
/// Returns a build error if the default checker cannot be constructed.
pub fn check_spec_text(path: &Path, text: &str) -> Result<LintResult, CheckError> {
    Ok(default_checker()?.check_spec(path, text))
}

/// Checks one package with the default checker.
///
/// # Errors
///
/// Returns [`CheckError::Io`] if a spec file cannot be read, or a build
/// error if the default checker cannot be constructed.
pub fn check_package(pkg: &dyn Package) -> Result<LintResult, CheckError> {
    default_checker()?.check_package(pkg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_checker_builds_with_all_rules() {
        let checker = default_checker().expect("default checker builds");
        assert_eq!(checker.rule_count(), 11);
        assert_eq!(checker.catalog().len(), 14);
    }

    #[test]
    fn check_spec_text_runs_end_to_end() {
        let result = check_spec_text(Path::new("tar.spec"), "Name: tar\n%install\ncp tar\n")
            .expect("check succeeds");
        assert!(result.diagnostics.is_empty());
    }
}
