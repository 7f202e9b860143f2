//! Closed catalog of diagnostic names and their explanations.
//!
//! Every diagnostic a rule may emit has to be registered here exactly once,
//! at startup, together with a fixed human-readable explanation. Duplicate
//! registration is an error rather than a silent overwrite, and the checker
//! builder rejects rules that declare names missing from the catalog.

use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised while building a diagnostic catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The same diagnostic name was registered twice.
    #[error("diagnostic `{0}` registered twice")]
    Duplicate(String),
}

/// Immutable registry mapping diagnostic names to explanation strings.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a diagnostic name with its explanation.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Duplicate`] if the name is already present.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Result<(), CatalogError> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(CatalogError::Duplicate(name));
        }
        self.entries.insert(name, explanation.into());
        Ok(())
    }

    /// Returns true if the name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the explanation for a registered name.
    #[must_use]
    pub fn explanation(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Returns all registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the number of registered diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no diagnostics are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Explanations for every built-in SCL diagnostic.
const DEFAULT_ENTRIES: &[(&str, &str)] = &[
    (
        "undeclared-scl",
        "The spec file uses SCL macros, but is not an SCL metapackage and does not \
         call %scl_package. Either define %scl or wrap the macros in %{?scl:...}.",
    ),
    (
        "no-runtime-in-scl-metapackage",
        "An SCL metapackage must have a runtime subpackage.",
    ),
    (
        "no-build-in-scl-metapackage",
        "An SCL metapackage must have a build subpackage.",
    ),
    (
        "weird-subpackage-in-scl-metapackage",
        "An SCL metapackage should contain only runtime and build subpackages.",
    ),
    (
        "scl-metapackage-without-scl-utils-build-br",
        "An SCL metapackage must BuildRequire scl-utils-build.",
    ),
    (
        "scl-build-without-requiring-scl-utils-build",
        "The build subpackage of an SCL metapackage should Require scl-utils-build.",
    ),
    (
        "scl-metapackage-without-%scl_install",
        "An SCL metapackage must call %scl_install in the %install section.",
    ),
    (
        "noarch-scl-metapackage-with-libdir",
        "A noarch SCL metapackage must not reference %{_libdir}, because the \
         library directory is architecture dependent.",
    ),
    (
        "scl-main-metapackage-contains-files",
        "The main package of an SCL metapackage should own no files; move them \
         to the runtime or build subpackage.",
    ),
    (
        "scl-runtime-package-without-%scl_files",
        "The runtime subpackage of an SCL metapackage must list %scl_files in \
         its %files section.",
    ),
    (
        "scl-build-package-without-rpm-macros",
        "The build subpackage of an SCL metapackage must ship the SCL rpm \
         macros file (%{_root_sysconfdir}/rpm/macros.%{scl}-config).",
    ),
    (
        "missing-pkg_name-definition",
        "An SCL-ready package should define %pkg_name for builds outside the \
         collection: %{!?scl:%global pkg_name %{name}}.",
    ),
    (
        "name-without-scl-prefix",
        "The name of an SCL-ready package must start with %{?scl_prefix}.",
    ),
    (
        "name-with-scl-prefix-without-condition",
        "The SCL prefix in the package name must use the conditional form \
         %{?scl_prefix}, otherwise the package fails to build outside the \
         collection.",
    ),
];

/// Builds the catalog of all built-in SCL diagnostics.
///
/// # Errors
///
/// Returns [`CatalogError::Duplicate`] if the built-in table itself contains
/// a repeated name, which is a defect in this crate.
pub fn default_catalog() -> Result<Catalog, CatalogError> {
    let mut catalog = Catalog::new();
    for (name, explanation) in DEFAULT_ENTRIES {
        catalog.register(*name, *explanation)?;
    }
    Ok(catalog)
}
