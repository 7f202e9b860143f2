//! Structured fact extraction from spec-file regions.
//!
//! Extractors pull the facts the rule engines consume out of raw spec
//! text: dependency declarations, the package name, per-subpackage file
//! lists, and subpackage declarations. Absence of a requested section is
//! an empty result, never an error — a missing section is meaningful
//! input to rules.

use crate::patterns::patterns;
use crate::region::{self, install_region, locate_literal, locate_literal_from, main_section};
use regex::Regex;
use tracing::debug;

/// Which dependency declaration kind to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    /// `Requires:` lines.
    Requires,
    /// `BuildRequires:` lines.
    BuildRequires,
}

/// Extracts dependency-line payloads from a region of spec text.
///
/// Scans line-anchored `Requires:` / `BuildRequires:` declarations left to
/// right and collects the raw remainder of each matching line. Each
/// physical line is one entry: backslash continuation lines are
/// deliberately not merged into the preceding declaration.
#[must_use]
pub fn extract_dependencies(region: &str, kind: DependencyKind) -> Vec<String> {
    let pattern = match kind {
        DependencyKind::Requires => &patterns().requires,
        DependencyKind::BuildRequires => &patterns().buildrequires,
    };
    pattern
        .captures_iter(region)
        .map(|caps| caps["deps"].to_string())
        .collect()
}

/// Extracts the first `Name:` value from spec text, trimmed.
#[must_use]
pub fn extract_package_name(text: &str) -> Option<String> {
    patterns()
        .name_line
        .captures(text)
        .map(|caps| caps["name"].trim().to_string())
}

/// Builds the `%files` declaration matcher for the main package or a
/// named subpackage (optionally introduced with the `-n` rename flag).
#[allow(clippy::expect_used)] // escaped name cannot break the pattern
fn files_declaration(subpackage: Option<&str>) -> Regex {
    match subpackage {
        Some(name) => Regex::new(&format!(
            r"(?m)(^|\s)%files\s+(?:-n\s+)?{}\s*$",
            regex::escape(name)
        ))
        .expect("files pattern must compile"),
        None => Regex::new(r"(?m)(^|\s)%files\s*$").expect("files pattern must compile"),
    }
}

/// Extracts the file list of the main package (`subpackage = None`) or of
/// a named subpackage.
///
/// Locates the matching `%files` declaration line and collects all
/// non-blank lines up to the next `%files` marker or `%changelog`,
/// whichever occurs first. Lines are returned verbatim, comments and
/// macro invocations included.
#[must_use]
pub fn extract_files(text: &str, subpackage: Option<&str>) -> Vec<String> {
    let Some(found) = files_declaration(subpackage).find(text) else {
        return Vec::new();
    };
    let start = found.end();
    let end = [
        locate_literal_from(text, "%files", start),
        locate_literal_from(text, "%changelog", start),
    ]
    .into_iter()
    .flatten()
    .min()
    .unwrap_or(text.len());

    region::Region::new(start, end)
        .slice(text)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(ToString::to_string)
        .collect()
}

/// A subpackage declared inside a metapackage spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subpackage {
    /// Subpackage name (`runtime`, `build`, or an alien identifier).
    pub name: String,
    /// Offset of the `%package` declaration in the spec text.
    pub declaration_offset: usize,
    /// Text from the declaration to the next `%package` marker or EOF.
    pub dependency_section: String,
}

impl Subpackage {
    /// Locates a subpackage by its declaration matcher and carves out its
    /// dependency section.
    fn locate(text: &str, name: &str, declaration: &Regex) -> Option<Self> {
        let found = declaration.find(text)?;
        let start = found.start();
        let end = locate_literal_from(text, "%package", found.end()).unwrap_or(text.len());
        Some(Self {
            name: name.to_string(),
            declaration_offset: start,
            dependency_section: region::Region::new(start, end).slice(text).to_string(),
        })
    }
}

/// Every fact the metapackage rule engine reads.
///
/// Extracted once per spec so rules stay independent of raw text and can
/// be tested against synthetic fact sets.
#[derive(Debug, Clone, Default)]
pub struct MetapackageFacts {
    /// The `runtime` subpackage, when declared.
    pub runtime: Option<Subpackage>,
    /// The `build` subpackage, when declared.
    pub build: Option<Subpackage>,
    /// Name of the first subpackage other than `runtime`/`build`, if any.
    pub alien: Option<String>,
    /// Main-package text before the first `%package` declaration.
    pub main_section: String,
    /// The `%install` region, per the fallback-chain boundary rules.
    pub install_section: String,
    /// Whether `BuildArch: noarch` appears before the `%install` region.
    pub noarch_before_install: bool,
    /// File list of the main package (no subpackage qualifier).
    pub main_files: Vec<String>,
    /// File list of the `runtime` subpackage.
    pub runtime_files: Vec<String>,
    /// File list of the `build` subpackage.
    pub build_files: Vec<String>,
}

impl MetapackageFacts {
    /// Extracts all metapackage facts from spec text.
    #[must_use]
    pub fn extract(text: &str) -> Self {
        let p = patterns();
        let runtime = Subpackage::locate(text, "runtime", &p.subpackage_runtime);
        let build = Subpackage::locate(text, "build", &p.subpackage_build);

        // Only the first alien declaration is reported.
        let alien = p
            .subpackage_any
            .captures_iter(text)
            .map(|caps| caps["name"].to_string())
            .find(|name| name != "runtime" && name != "build");

        let install = install_region(text);
        let before_install = region::Region::new(0, locate_literal(text, "%install").unwrap_or(text.len()));

        let facts = Self {
            runtime,
            build,
            alien,
            main_section: main_section(text).to_string(),
            install_section: install.slice(text).to_string(),
            noarch_before_install: p.noarch.is_match(before_install.slice(text)),
            main_files: extract_files(text, None),
            runtime_files: extract_files(text, Some("runtime")),
            build_files: extract_files(text, Some("build")),
        };
        debug!(
            runtime = facts.runtime.is_some(),
            build = facts.build.is_some(),
            alien = facts.alien.as_deref(),
            "extracted metapackage facts"
        );
        facts
    }
}

/// Every fact the SCL-ready rule engine reads.
#[derive(Debug, Clone, Default)]
pub struct SclReadyFacts {
    /// The extracted `Name:` value, when present.
    pub name: Option<String>,
    /// Whether the `%{!?scl: %define pkg_name %{name}}` guard appears.
    pub pkg_name_guard: bool,
}

impl SclReadyFacts {
    /// Extracts all SCL-ready facts from spec text.
    #[must_use]
    pub fn extract(text: &str) -> Self {
        let facts = Self {
            name: extract_package_name(text),
            pkg_name_guard: patterns().pkg_name_guard.is_match(text),
        };
        debug!(name = facts.name.as_deref(), guard = facts.pkg_name_guard, "extracted SCL-ready facts");
        facts
    }
}
