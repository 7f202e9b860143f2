//! Validation rules for SCL metapackage specs.
//!
//! A metapackage defines a collection: it is expected to carry `runtime`
//! and `build` subpackages, BuildRequire `scl-utils-build`, call
//! `%scl_install`, and own no files of its own. Each rule here checks one
//! of those expectations against pre-extracted [`MetapackageFacts`];
//! rules whose facts are unavailable (e.g., no `build` subpackage) stay
//! silent and leave the absence to the rule that owns it.

use scl_lint_core::{
    extract_dependencies, patterns, DependencyKind, Diagnostic, MetapackageFacts, MetapackageRule,
};
use tracing::trace;

/// Emitted when the `runtime` subpackage is missing.
pub const NO_RUNTIME: &str = "no-runtime-in-scl-metapackage";
/// Emitted when the `build` subpackage is missing.
pub const NO_BUILD: &str = "no-build-in-scl-metapackage";
/// Emitted when the `build` subpackage does not Require `scl-utils-build`.
pub const BUILD_WITHOUT_SCL_UTILS: &str = "scl-build-without-requiring-scl-utils-build";
/// Emitted for any subpackage other than `runtime`/`build`.
pub const WEIRD_SUBPACKAGE: &str = "weird-subpackage-in-scl-metapackage";
/// Emitted when the main package does not BuildRequire `scl-utils-build`.
pub const NO_SCL_UTILS_BUILD_BR: &str = "scl-metapackage-without-scl-utils-build-br";
/// Emitted when the `%install` section does not call `%scl_install`.
pub const NO_SCL_INSTALL: &str = "scl-metapackage-without-%scl_install";
/// Emitted when a noarch metapackage references `%{_libdir}` in `%install`.
pub const NOARCH_WITH_LIBDIR: &str = "noarch-scl-metapackage-with-libdir";
/// Emitted when the main package's file list is non-empty.
pub const MAIN_CONTAINS_FILES: &str = "scl-main-metapackage-contains-files";
/// Emitted when the runtime file list lacks `%scl_files`.
pub const RUNTIME_WITHOUT_SCL_FILES: &str = "scl-runtime-package-without-%scl_files";
/// Emitted when the build file list lacks the rpm macros file.
pub const BUILD_WITHOUT_RPM_MACROS: &str = "scl-build-package-without-rpm-macros";

/// The dependency token every collection build root needs.
const SCL_UTILS_BUILD: &str = "scl-utils-build";

/// Requires a `runtime` subpackage.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireRuntimeSubpackage;

impl MetapackageRule for RequireRuntimeSubpackage {
    fn name(&self) -> &'static str {
        "require-runtime-subpackage"
    }

    fn description(&self) -> &'static str {
        "An SCL metapackage must declare a runtime subpackage"
    }

    fn diagnostics(&self) -> &'static [&'static str] {
        &[NO_RUNTIME]
    }

    fn check(&self, facts: &MetapackageFacts) -> Vec<Diagnostic> {
        if facts.runtime.is_none() {
            vec![Diagnostic::error(NO_RUNTIME)]
        } else {
            Vec::new()
        }
    }
}

/// Requires a `build` subpackage, and that it Requires `scl-utils-build`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireBuildSubpackage;

impl MetapackageRule for RequireBuildSubpackage {
    fn name(&self) -> &'static str {
        "require-build-subpackage"
    }

    fn description(&self) -> &'static str {
        "An SCL metapackage must declare a build subpackage requiring scl-utils-build"
    }

    fn diagnostics(&self) -> &'static [&'static str] {
        &[NO_BUILD, BUILD_WITHOUT_SCL_UTILS]
    }

    fn check(&self, facts: &MetapackageFacts) -> Vec<Diagnostic> {
        let Some(build) = &facts.build else {
            return vec![Diagnostic::error(NO_BUILD)];
        };
        let requires = extract_dependencies(&build.dependency_section, DependencyKind::Requires);
        if requires.join(" ").contains(SCL_UTILS_BUILD) {
            Vec::new()
        } else {
            vec![Diagnostic::warning(BUILD_WITHOUT_SCL_UTILS)]
        }
    }
}

/// Rejects subpackages other than `runtime` and `build`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAlienSubpackages;

impl MetapackageRule for NoAlienSubpackages {
    fn name(&self) -> &'static str {
        "no-alien-subpackages"
    }

    fn description(&self) -> &'static str {
        "An SCL metapackage should contain only runtime and build subpackages"
    }

    fn diagnostics(&self) -> &'static [&'static str] {
        &[WEIRD_SUBPACKAGE]
    }

    fn check(&self, facts: &MetapackageFacts) -> Vec<Diagnostic> {
        match &facts.alien {
            Some(name) => vec![Diagnostic::error(WEIRD_SUBPACKAGE).with_detail(name)],
            None => Vec::new(),
        }
    }
}

/// Requires `scl-utils-build` among the main package's BuildRequires.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireSclUtilsBuildBr;

impl MetapackageRule for RequireSclUtilsBuildBr {
    fn name(&self) -> &'static str {
        "require-scl-utils-build-br"
    }

    fn description(&self) -> &'static str {
        "An SCL metapackage must BuildRequire scl-utils-build"
    }

    fn diagnostics(&self) -> &'static [&'static str] {
        &[NO_SCL_UTILS_BUILD_BR]
    }

    fn check(&self, facts: &MetapackageFacts) -> Vec<Diagnostic> {
        let build_requires =
            extract_dependencies(&facts.main_section, DependencyKind::BuildRequires);
        if build_requires.join(" ").contains(SCL_UTILS_BUILD) {
            Vec::new()
        } else {
            vec![Diagnostic::error(NO_SCL_UTILS_BUILD_BR)]
        }
    }
}

/// Requires a `%scl_install` call in the `%install` section.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireSclInstall;

impl MetapackageRule for RequireSclInstall {
    fn name(&self) -> &'static str {
        "require-scl-install"
    }

    fn description(&self) -> &'static str {
        "An SCL metapackage must call %scl_install in %install"
    }

    fn diagnostics(&self) -> &'static [&'static str] {
        &[NO_SCL_INSTALL]
    }

    fn check(&self, facts: &MetapackageFacts) -> Vec<Diagnostic> {
        if patterns().scl_install.is_match(&facts.install_section) {
            Vec::new()
        } else {
            vec![Diagnostic::error(NO_SCL_INSTALL)]
        }
    }
}

/// Flags noarch metapackages whose `%install` section references
/// `%{_libdir}` — an architecture-specific path in an architecture-free
/// package is contradictory.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoarchLibdirConflict;

impl MetapackageRule for NoarchLibdirConflict {
    fn name(&self) -> &'static str {
        "noarch-libdir-conflict"
    }

    fn description(&self) -> &'static str {
        "A noarch SCL metapackage must not reference %{_libdir} in %install"
    }

    fn diagnostics(&self) -> &'static [&'static str] {
        &[NOARCH_WITH_LIBDIR]
    }

    fn check(&self, facts: &MetapackageFacts) -> Vec<Diagnostic> {
        if facts.noarch_before_install && patterns().libdir.is_match(&facts.install_section) {
            vec![Diagnostic::error(NOARCH_WITH_LIBDIR)]
        } else {
            Vec::new()
        }
    }
}

/// Warns when the main package owns files; a metapackage should own none.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMainPackageFiles;

impl MetapackageRule for NoMainPackageFiles {
    fn name(&self) -> &'static str {
        "no-main-package-files"
    }

    fn description(&self) -> &'static str {
        "The main package of an SCL metapackage should own no files"
    }

    fn diagnostics(&self) -> &'static [&'static str] {
        &[MAIN_CONTAINS_FILES]
    }

    fn check(&self, facts: &MetapackageFacts) -> Vec<Diagnostic> {
        if facts.main_files.is_empty() {
            Vec::new()
        } else {
            vec![Diagnostic::warning(MAIN_CONTAINS_FILES).with_detail(facts.main_files.join(", "))]
        }
    }
}

/// Requires `%scl_files` in the runtime subpackage's file list.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeFilesUseSclFiles;

impl MetapackageRule for RuntimeFilesUseSclFiles {
    fn name(&self) -> &'static str {
        "runtime-files-use-scl-files"
    }

    fn description(&self) -> &'static str {
        "The runtime subpackage must list %scl_files in its %files section"
    }

    fn diagnostics(&self) -> &'static [&'static str] {
        &[RUNTIME_WITHOUT_SCL_FILES]
    }

    fn check(&self, facts: &MetapackageFacts) -> Vec<Diagnostic> {
        if facts.runtime.is_none() {
            // The missing subpackage is require-runtime-subpackage's finding.
            trace!("no runtime subpackage, rule inapplicable");
            return Vec::new();
        }
        if facts
            .runtime_files
            .iter()
            .any(|line| patterns().scl_files.is_match(line))
        {
            Vec::new()
        } else {
            vec![Diagnostic::error(RUNTIME_WITHOUT_SCL_FILES)]
        }
    }
}

/// Requires the rpm macros file in the build subpackage's file list.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildFilesShipRpmMacros;

impl MetapackageRule for BuildFilesShipRpmMacros {
    fn name(&self) -> &'static str {
        "build-files-ship-rpm-macros"
    }

    fn description(&self) -> &'static str {
        "The build subpackage must ship the SCL rpm macros file"
    }

    fn diagnostics(&self) -> &'static [&'static str] {
        &[BUILD_WITHOUT_RPM_MACROS]
    }

    fn check(&self, facts: &MetapackageFacts) -> Vec<Diagnostic> {
        if facts.build.is_none() {
            trace!("no build subpackage, rule inapplicable");
            return Vec::new();
        }
        if facts
            .build_files
            .iter()
            .any(|line| patterns().scl_macros_path.is_match(line))
        {
            Vec::new()
        } else {
            vec![Diagnostic::error(BUILD_WITHOUT_RPM_MACROS)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scl_lint_core::Subpackage;

    fn subpackage(name: &str, dependency_section: &str) -> Subpackage {
        Subpackage {
            name: name.to_string(),
            declaration_offset: 0,
            dependency_section: dependency_section.to_string(),
        }
    }

    /// Facts for a fully conforming metapackage.
    fn valid_facts() -> MetapackageFacts {
        MetapackageFacts {
            runtime: Some(subpackage("runtime", "%package runtime\nRequires: scl-utils\n")),
            build: Some(subpackage("build", "%package build\nRequires: scl-utils-build\n")),
            alien: None,
            main_section: "Name: foo\nBuildRequires: scl-utils-build\n".to_string(),
            install_section: "%install\n%scl_install\n".to_string(),
            noarch_before_install: true,
            main_files: Vec::new(),
            runtime_files: vec!["%scl_files".to_string()],
            build_files: vec!["%{_root_sysconfdir}/rpm/macros.%{scl}-config".to_string()],
        }
    }

    #[test]
    fn valid_facts_raise_nothing() {
        let facts = valid_facts();
        assert!(RequireRuntimeSubpackage.check(&facts).is_empty());
        assert!(RequireBuildSubpackage.check(&facts).is_empty());
        assert!(NoAlienSubpackages.check(&facts).is_empty());
        assert!(RequireSclUtilsBuildBr.check(&facts).is_empty());
        assert!(RequireSclInstall.check(&facts).is_empty());
        assert!(NoarchLibdirConflict.check(&facts).is_empty());
        assert!(NoMainPackageFiles.check(&facts).is_empty());
        assert!(RuntimeFilesUseSclFiles.check(&facts).is_empty());
        assert!(BuildFilesShipRpmMacros.check(&facts).is_empty());
    }

    #[test]
    fn missing_runtime_is_an_error() {
        let facts = MetapackageFacts {
            runtime: None,
            ..valid_facts()
        };
        let diagnostics = RequireRuntimeSubpackage.check(&facts);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].name, NO_RUNTIME);
        // The file-list rule becomes inapplicable, not failing.
        assert!(RuntimeFilesUseSclFiles.check(&facts).is_empty());
    }

    #[test]
    fn missing_build_is_an_error_and_suppresses_requires_check() {
        let facts = MetapackageFacts {
            build: None,
            ..valid_facts()
        };
        let diagnostics = RequireBuildSubpackage.check(&facts);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].name, NO_BUILD);
        assert!(BuildFilesShipRpmMacros.check(&facts).is_empty());
    }

    #[test]
    fn build_without_scl_utils_build_is_a_warning() {
        let facts = MetapackageFacts {
            build: Some(subpackage("build", "%package build\nRequires: something-else\n")),
            ..valid_facts()
        };
        let diagnostics = RequireBuildSubpackage.check(&facts);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].name, BUILD_WITHOUT_SCL_UTILS);
        assert_eq!(diagnostics[0].severity, scl_lint_core::Severity::Warning);
    }

    #[test]
    fn build_requires_line_does_not_satisfy_requires_check() {
        // Only Requires: lines count for the build subpackage.
        let facts = MetapackageFacts {
            build: Some(subpackage(
                "build",
                "%package build\nBuildRequires: scl-utils-build\n",
            )),
            ..valid_facts()
        };
        let diagnostics = RequireBuildSubpackage.check(&facts);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].name, BUILD_WITHOUT_SCL_UTILS);
    }

    #[test]
    fn alien_subpackage_carries_name_as_detail() {
        let facts = MetapackageFacts {
            alien: Some("hehe".to_string()),
            ..valid_facts()
        };
        let diagnostics = NoAlienSubpackages.check(&facts);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].name, WEIRD_SUBPACKAGE);
        assert_eq!(diagnostics[0].detail.as_deref(), Some("hehe"));
    }

    #[test]
    fn missing_build_requires_is_an_error() {
        let facts = MetapackageFacts {
            main_section: "Name: foo\nRequires: scl-utils-build\n".to_string(),
            ..valid_facts()
        };
        let diagnostics = RequireSclUtilsBuildBr.check(&facts);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].name, NO_SCL_UTILS_BUILD_BR);
    }

    #[test]
    fn missing_scl_install_is_an_error() {
        let facts = MetapackageFacts {
            install_section: "%install\ncp foo bar\n".to_string(),
            ..valid_facts()
        };
        let diagnostics = RequireSclInstall.check(&facts);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].name, NO_SCL_INSTALL);
    }

    #[test]
    fn noarch_with_libdir_in_install_is_an_error() {
        let facts = MetapackageFacts {
            install_section: "%install\nmkdir -p %{_libdir}/foo\n%scl_install\n".to_string(),
            ..valid_facts()
        };
        let diagnostics = NoarchLibdirConflict.check(&facts);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].name, NOARCH_WITH_LIBDIR);
    }

    #[test]
    fn libdir_without_noarch_is_fine() {
        let facts = MetapackageFacts {
            install_section: "%install\nmkdir -p %{_libdir}/foo\n".to_string(),
            noarch_before_install: false,
            ..valid_facts()
        };
        assert!(NoarchLibdirConflict.check(&facts).is_empty());
    }

    #[test]
    fn main_files_are_joined_into_detail() {
        let facts = MetapackageFacts {
            main_files: vec!["/usr/foo".to_string(), "/usr/bar".to_string()],
            ..valid_facts()
        };
        let diagnostics = NoMainPackageFiles.check(&facts);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].name, MAIN_CONTAINS_FILES);
        assert_eq!(diagnostics[0].detail.as_deref(), Some("/usr/foo, /usr/bar"));
    }

    #[test]
    fn runtime_files_without_scl_files_is_an_error() {
        let facts = MetapackageFacts {
            runtime_files: vec!["/opt/rh/foo".to_string()],
            ..valid_facts()
        };
        let diagnostics = RuntimeFilesUseSclFiles.check(&facts);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].name, RUNTIME_WITHOUT_SCL_FILES);
    }

    #[test]
    fn build_files_without_macros_file_is_an_error() {
        let facts = MetapackageFacts {
            build_files: Vec::new(),
            ..valid_facts()
        };
        let diagnostics = BuildFilesShipRpmMacros.check(&facts);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].name, BUILD_WITHOUT_RPM_MACROS);
    }
}
