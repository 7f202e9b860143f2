//! Compiled matchers for SCL spec-file constructs.
//!
//! One fixed, immutable table of named recognizers shared by the fact
//! extractors and the rules, so every matcher is independently testable
//! instead of being inlined in rule bodies. Spec authors write macros as
//! `%{?x}`, `%{x}`, or bare `%x` interchangeably; every matcher tolerates
//! all three decoration variants.

use regex::Regex;
use std::sync::LazyLock;

/// The registry of compiled spec-file matchers.
#[derive(Debug)]
pub struct Patterns {
    /// `%define scl <name>` / `%global scl <name>` — marks a metapackage.
    pub scl_definition: Regex,
    /// `%{?scl: %scl_package <name>}` — marks an SCL-ready package.
    pub scl_package_call: Regex,
    /// Any bare `%scl...` macro token, used to detect undeclared use.
    pub scl_macro_use: Regex,
    /// `Name:` line, with the value captured as `name`.
    pub name_line: Regex,
    /// The `%{!?scl: %define pkg_name %{name}}` guard idiom.
    pub pkg_name_guard: Regex,
    /// `%{scl_prefix}`, conditional or not.
    pub scl_prefix: Regex,
    /// The stricter `%{?scl_prefix}` conditional form.
    pub scl_prefix_conditional: Regex,
    /// `%package runtime` exactly.
    pub subpackage_runtime: Regex,
    /// `%package build` exactly.
    pub subpackage_build: Regex,
    /// Any `%package [-n] <name>` declaration, with the name captured as
    /// `name`. Alien detection filters out `runtime` and `build` in code
    /// since the regex engine has no negative lookahead.
    pub subpackage_any: Regex,
    /// `%scl_install` invocation.
    pub scl_install: Regex,
    /// `BuildArch: noarch` line.
    pub noarch: Regex,
    /// `%{_libdir}` reference.
    pub libdir: Regex,
    /// `%scl_files` file-list line.
    pub scl_files: Regex,
    /// The build subpackage's rpm-macros file path.
    pub scl_macros_path: Regex,
    /// `Requires:` line, with the payload captured as `deps`.
    pub requires: Regex,
    /// `BuildRequires:` line, with the payload captured as `deps`.
    pub buildrequires: Regex,
}

impl Patterns {
    /// Compiles the full matcher table.
    ///
    /// # Panics
    ///
    /// Panics if any built-in pattern fails to compile, which is a defect
    /// in this crate.
    #[allow(clippy::expect_used)]
    #[must_use]
    pub fn new() -> Self {
        let compile = |pattern: &str| Regex::new(pattern).expect("built-in pattern must compile");
        Self {
            scl_definition: compile(r"(?m)(^|\s)%(define|global)\s+scl\s+\S+\s*$"),
            scl_package_call: compile(r"(?m)(^|\s)%\{\?scl\s*:\s*%scl_package\s+\S+\s*\}\s*$"),
            scl_macro_use: compile(r"%\{?\??scl"),
            name_line: compile(r"(?m)(^|\s)Name:\s*(?P<name>\S+)\s*$"),
            pkg_name_guard: compile(
                r"(?m)(^|\s)%\{!\?scl:\s*%(define|global)\s+pkg_name\s+%\{name\}\}\s*$",
            ),
            scl_prefix: compile(r"%\{\??scl_prefix\}"),
            scl_prefix_conditional: compile(r"%\{\?scl_prefix\}"),
            subpackage_runtime: compile(r"(?m)(^|\s)%package\s+runtime\s*$"),
            subpackage_build: compile(r"(?m)(^|\s)%package\s+build\s*$"),
            subpackage_any: compile(r"(?m)(^|\s)%package\s+(?:-n\s+)?(?P<name>\S+)\s*$"),
            scl_install: compile(r"(?m)(^|\s)%\{?\??scl_install\}?(\s|$)"),
            noarch: compile(r"(?mi)(^|\s)BuildArch:\s*noarch\s*$"),
            libdir: compile(r"%\{?\??_libdir\}?"),
            scl_files: compile(r"(?m)(^|\s)%\{?\??scl_files\}?\s*$"),
            scl_macros_path: compile(
                r"(?m)(^|\s)%\{?\??_root_sysconfdir\}?/rpm/macros\.%\{?\??scl\}?-config\s*$",
            ),
            requires: compile(r"(?m)^Requires:\s*(?P<deps>.+)$"),
            buildrequires: compile(r"(?m)^BuildRequires:\s*(?P<deps>.+)$"),
        }
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self::new()
    }
}

static PATTERNS: LazyLock<Patterns> = LazyLock::new(Patterns::new);

/// Returns the shared, lazily compiled matcher registry.
#[must_use]
pub fn patterns() -> &'static Patterns {
    &PATTERNS
}
