//! # scl-lint-core
//!
//! Core framework for linting RPM spec files that follow the Software
//! Collections (SCL) packaging convention.
//!
//! Spec files are a semi-structured macro language with no formal schema;
//! this crate slices raw spec text into marker-bounded regions, extracts
//! structured facts (subpackages, dependency lines, file lists), classifies
//! the package role, and runs role-specific rule engines that emit named
//! diagnostics from a closed catalog. It provides:
//!
//! - [`Catalog`] — the closed, duplicate-safe diagnostic registry
//! - [`Patterns`] — the compiled spec-construct matcher table
//! - [`MetapackageFacts`] / [`SclReadyFacts`] — extracted rule inputs
//! - [`MetapackageRule`] / [`SclReadyRule`] — rule traits
//! - [`SclCheck`] — the classification-and-rule orchestrator
//!
//! ## Example
//!
//! ```ignore
//! use scl_lint_core::{catalog, SclCheck};
//!
//! let checker = SclCheck::builder()
//!     .catalog(catalog::default_catalog()?)
//!     .metapackage_rule(MyRule)
//!     .build()?;
//!
//! let result = checker.check_spec("foo.spec".as_ref(), &spec_text);
//! print!("{}", result.format_report());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
mod checker;
mod classify;
pub mod facts;
mod package;
pub mod patterns;
pub mod region;
mod rule;
mod types;

pub use catalog::{default_catalog, Catalog, CatalogError};
pub use checker::{CheckError, SclCheck, SclCheckBuilder};
pub use classify::{classify, Classification};
pub use facts::{
    extract_dependencies, extract_files, extract_package_name, DependencyKind, MetapackageFacts,
    SclReadyFacts, Subpackage,
};
pub use package::{read_lines, FileRecord, Package};
pub use patterns::{patterns, Patterns};
pub use region::Region;
pub use rule::{MetapackageRule, MetapackageRuleBox, SclReadyRule, SclReadyRuleBox};
pub use types::{Diagnostic, LintResult, Severity};
