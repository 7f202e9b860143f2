//! # scl-lint
//!
//! Rule-based linter for RPM spec files that follow the Software
//! Collections (SCL) packaging convention.
//!
//! A spec file is classified as an SCL *metapackage* (it defines a
//! collection via `%global scl ...`), an *SCL-ready* package (it calls
//! `%{?scl: %scl_package ...}`), or unrelated. Role-specific rule engines
//! then validate subpackage structure, dependency declarations, file
//! lists, and naming conventions, emitting diagnostics from a closed
//! catalog.
//!
//! ## Example
//!
//! ```ignore
//! use std::path::Path;
//!
//! let result = scl_lint::check_spec_text(Path::new("nodejs010.spec"), &text)?;
//! if result.has_errors() {
//!     print!("{}", result.format_report());
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod runner;

pub use runner::{check_package, check_spec_text, default_checker};

pub use scl_lint_core::{
    classify, default_catalog, Catalog, CatalogError, CheckError, Classification, Diagnostic,
    FileRecord, LintResult, Package, SclCheck, SclCheckBuilder, Severity,
};
pub use scl_lint_rules::presets;
