//! Core types for lint diagnostics and results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for lint diagnostics.
///
/// The reporting contract admits exactly two levels: warnings that should
/// be addressed and errors that must be fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single lint finding, named after an entry in the diagnostic catalog.
///
/// Diagnostics are immutable once created: rules construct them with the
/// builder-style methods, the checker stamps the package and spec-file
/// location, and the reporting sink consumes them as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Catalog name of the diagnostic (e.g., `no-runtime-in-scl-metapackage`).
    pub name: String,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Name of the package the diagnostic applies to, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Path of the spec file the diagnostic was raised against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<PathBuf>,
    /// Free-form detail string (e.g., the offending subpackage name).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Diagnostic {
    /// Creates a new diagnostic with an explicit severity.
    #[must_use]
    pub fn new(name: impl Into<String>, severity: Severity) -> Self {
        Self {
            name: name.into(),
            severity,
            package: None,
            location: None,
            detail: None,
        }
    }

    /// Creates an error-level diagnostic.
    #[must_use]
    pub fn error(name: impl Into<String>) -> Self {
        Self::new(name, Severity::Error)
    }

    /// Creates a warning-level diagnostic.
    #[must_use]
    pub fn warning(name: impl Into<String>) -> Self {
        Self::new(name, Severity::Warning)
    }

    /// Attaches a detail string.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attaches the spec-file location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Attaches the package name.
    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(package) = &self.package {
            write!(f, "{package}: ")?;
        }
        write!(f, "{}: {}", self.severity, self.name)?;
        if let Some(location) = &self.location {
            write!(f, " ({})", location.display())?;
        }
        if let Some(detail) = &self.detail {
            write!(f, " {detail}")?;
        }
        Ok(())
    }
}

/// Result of running SCL analysis over one or more spec files.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All diagnostics found, in rule-evaluation order.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of spec files analyzed.
    pub specs_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any error-level diagnostics.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns true if there are any diagnostics at all.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity >= Severity::Warning)
    }

    /// Returns diagnostics filtered by severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .collect()
    }

    /// Counts diagnostics as `(errors, warnings)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize) {
        let errors = self
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        let warnings = self
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();
        (errors, warnings)
    }

    /// Formats all diagnostics plus a summary line for terminal output.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;

        let mut report = String::new();
        for diagnostic in &self.diagnostics {
            let _ = writeln!(report, "{diagnostic}");
        }

        let (errors, warnings) = self.count_by_severity();
        let _ = writeln!(
            report,
            "Found {} error(s), {} warning(s) in {} spec file(s)",
            errors, warnings, self.specs_checked
        );
        report
    }

    /// Adds diagnostics from another result.
    pub fn extend(&mut self, other: Self) {
        self.diagnostics.extend(other.diagnostics);
        self.specs_checked += other.specs_checked;
    }
}
