//! # scl-lint-rules
//!
//! Built-in SCL packaging-convention rules for scl-lint.
//!
//! ## Metapackage rules
//!
//! | Rule | Diagnostics |
//! |------|-------------|
//! | `require-runtime-subpackage` | `no-runtime-in-scl-metapackage` |
//! | `require-build-subpackage` | `no-build-in-scl-metapackage`, `scl-build-without-requiring-scl-utils-build` |
//! | `no-alien-subpackages` | `weird-subpackage-in-scl-metapackage` |
//! | `require-scl-utils-build-br` | `scl-metapackage-without-scl-utils-build-br` |
//! | `require-scl-install` | `scl-metapackage-without-%scl_install` |
//! | `noarch-libdir-conflict` | `noarch-scl-metapackage-with-libdir` |
//! | `no-main-package-files` | `scl-main-metapackage-contains-files` |
//! | `runtime-files-use-scl-files` | `scl-runtime-package-without-%scl_files` |
//! | `build-files-ship-rpm-macros` | `scl-build-package-without-rpm-macros` |
//!
//! ## SCL-ready rules
//!
//! | Rule | Diagnostics |
//! |------|-------------|
//! | `require-pkg-name-guard` | `missing-pkg_name-definition` |
//! | `name-requires-scl-prefix` | `name-without-scl-prefix`, `name-with-scl-prefix-without-condition` |
//!
//! ## Usage
//!
//! ```ignore
//! use scl_lint_core::{default_catalog, SclCheck};
//! use scl_lint_rules::presets;
//!
//! let mut builder = SclCheck::builder().catalog(default_catalog()?);
//! for rule in presets::metapackage_rules() {
//!     builder = builder.metapackage_rule_box(rule);
//! }
//! let checker = builder.build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod metapackage;
pub mod presets;
pub mod scl_ready;

pub use metapackage::{
    BuildFilesShipRpmMacros, NoAlienSubpackages, NoMainPackageFiles, NoarchLibdirConflict,
    RequireBuildSubpackage, RequireRuntimeSubpackage, RequireSclInstall, RequireSclUtilsBuildBr,
    RuntimeFilesUseSclFiles,
};
pub use presets::{metapackage_rules, scl_ready_rules};
pub use scl_ready::{NameRequiresSclPrefix, RequirePkgNameGuard};

/// Re-export core types for convenience.
pub use scl_lint_core::{Diagnostic, MetapackageRule, SclReadyRule, Severity};
