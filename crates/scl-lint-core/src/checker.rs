//! The SCL checker: classification, fact extraction, and rule execution.

use crate::catalog::Catalog;
use crate::classify::{classify, Classification};
use crate::facts::{MetapackageFacts, SclReadyFacts};
use crate::package::{read_lines, Package};
use crate::rule::{MetapackageRule, MetapackageRuleBox, SclReadyRule, SclReadyRuleBox};
use crate::types::{Diagnostic, LintResult};

use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while building or running the checker.
#[derive(Debug, Error)]
pub enum CheckError {
    /// IO error reading a spec file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error building the diagnostic catalog.
    #[error("catalog error: {0}")]
    Catalog(#[from] crate::catalog::CatalogError),

    /// A rule declared a diagnostic name missing from the catalog.
    #[error("rule `{rule}` declares unregistered diagnostic `{name}`")]
    UnknownDiagnostic {
        /// Name of the offending rule.
        rule: String,
        /// The undeclared diagnostic name.
        name: String,
    },
}

/// Builder for configuring an [`SclCheck`].
///
/// Explicit construction replaces load-time side effects: the host process
/// builds a checker and registers it wherever it wants.
#[derive(Default)]
pub struct SclCheckBuilder {
    catalog: Catalog,
    metapackage_rules: Vec<MetapackageRuleBox>,
    scl_ready_rules: Vec<SclReadyRuleBox>,
}

impl SclCheckBuilder {
    /// Creates a new builder with an empty catalog and no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the diagnostic catalog.
    #[must_use]
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Adds a metapackage rule.
    #[must_use]
    pub fn metapackage_rule<R: MetapackageRule + 'static>(mut self, rule: R) -> Self {
        self.metapackage_rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed metapackage rule.
    #[must_use]
    pub fn metapackage_rule_box(mut self, rule: MetapackageRuleBox) -> Self {
        self.metapackage_rules.push(rule);
        self
    }

    /// Adds an SCL-ready rule.
    #[must_use]
    pub fn scl_ready_rule<R: SclReadyRule + 'static>(mut self, rule: R) -> Self {
        self.scl_ready_rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed SCL-ready rule.
    #[must_use]
    pub fn scl_ready_rule_box(mut self, rule: SclReadyRuleBox) -> Self {
        self.scl_ready_rules.push(rule);
        self
    }

    /// Builds the checker.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::UnknownDiagnostic`] if any rule declares a
    /// diagnostic name that is not registered in the catalog, or if the
    /// catalog lacks `undeclared-scl`, which the checker itself emits.
    pub fn build(self) -> Result<SclCheck, CheckError> {
        let mut declared: Vec<(&str, &'static [&'static str])> = vec![("<classifier>", &[UNDECLARED_SCL])];
        declared.extend(
            self.metapackage_rules
                .iter()
                .map(|rule| (rule.name(), rule.diagnostics())),
        );
        declared.extend(
            self.scl_ready_rules
                .iter()
                .map(|rule| (rule.name(), rule.diagnostics())),
        );

        for (rule, names) in declared {
            for name in names {
                if !self.catalog.contains(name) {
                    return Err(CheckError::UnknownDiagnostic {
                        rule: rule.to_string(),
                        name: (*name).to_string(),
                    });
                }
            }
        }

        Ok(SclCheck {
            catalog: self.catalog,
            metapackage_rules: self.metapackage_rules,
            scl_ready_rules: self.scl_ready_rules,
        })
    }
}

/// Diagnostic emitted directly by the classifier.
const UNDECLARED_SCL: &str = "undeclared-scl";

/// The SCL spec-file checker.
///
/// Stateless across invocations: analyzing one spec has no observable
/// effect on the analysis of another, so a batch driver may run checks
/// for distinct packages concurrently.
pub struct SclCheck {
    catalog: Catalog,
    metapackage_rules: Vec<MetapackageRuleBox>,
    scl_ready_rules: Vec<SclReadyRuleBox>,
}

impl std::fmt::Debug for SclCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SclCheck")
            .field("catalog", &self.catalog)
            .field("metapackage_rules", &self.metapackage_rules.len())
            .field("scl_ready_rules", &self.scl_ready_rules.len())
            .finish()
    }
}

impl SclCheck {
    /// Creates a new builder for configuring a checker.
    #[must_use]
    pub fn builder() -> SclCheckBuilder {
        SclCheckBuilder::new()
    }

    /// Returns the diagnostic catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the number of registered rules across both engines.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.metapackage_rules.len() + self.scl_ready_rules.len()
    }

    /// Checks one package.
    ///
    /// Binary packages are a silent pass-through: no facts are extracted
    /// and no diagnostics are produced. For source packages, every `.spec`
    /// member is read line-wise and analyzed; a source package with no
    /// spec file is silently ignored (other checks report that).
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Io`] if a spec file cannot be read.
    pub fn check_package(&self, pkg: &dyn Package) -> Result<LintResult, CheckError> {
        if !pkg.is_source() {
            // Placeholder for future binary-level SCL checks.
            debug!(package = pkg.name(), "binary package, skipping");
            return Ok(LintResult::new());
        }

        let mut result = LintResult::new();
        for (relative, record) in pkg.files() {
            if !relative.ends_with(".spec") {
                continue;
            }
            debug!(package = pkg.name(), spec = relative.as_str(), "analyzing spec file");
            let text = read_lines(&record.path)?.join("\n");
            let mut spec_result = self.check_spec(&record.path, &text);
            for diagnostic in &mut spec_result.diagnostics {
                diagnostic.package = Some(pkg.name().to_string());
            }
            result.extend(spec_result);
        }

        info!(
            package = pkg.name(),
            diagnostics = result.diagnostics.len(),
            specs = result.specs_checked,
            "package check complete"
        );
        Ok(result)
    }

    /// Checks one spec file's text.
    ///
    /// Classifies the text, extracts the role-specific facts, and runs the
    /// applicable rule engine in fixed order. Unrelated specs produce no
    /// diagnostics; undeclared SCL macro use produces exactly one.
    #[must_use]
    pub fn check_spec(&self, path: &Path, text: &str) -> LintResult {
        let mut result = LintResult::new();
        result.specs_checked = 1;

        let classification = classify(text);
        debug!(spec = %path.display(), ?classification, "classified spec");

        match classification {
            Classification::Metapackage => {
                let facts = MetapackageFacts::extract(text);
                for rule in &self.metapackage_rules {
                    self.report(&mut result, path, rule.check(&facts));
                }
            }
            Classification::SclReady => {
                let facts = SclReadyFacts::extract(text);
                for rule in &self.scl_ready_rules {
                    self.report(&mut result, path, rule.check(&facts));
                }
            }
            Classification::UndeclaredUse => {
                self.report(&mut result, path, vec![Diagnostic::error(UNDECLARED_SCL)]);
            }
            Classification::Unrelated => {}
        }

        result
    }

    /// Appends rule output to the result, stamping the spec location.
    fn report(&self, result: &mut LintResult, path: &Path, diagnostics: Vec<Diagnostic>) {
        for diagnostic in diagnostics {
            // Rules are validated at build time; a miss here is a defect.
            debug_assert!(
                self.catalog.contains(&diagnostic.name),
                "diagnostic `{}` is not registered",
                diagnostic.name
            );
            result.diagnostics.push(diagnostic.with_location(path));
        }
    }
}
