//! Rule traits for the two SCL rule engines.
//!
//! Rules read pre-extracted facts, not raw spec text, so each rule can be
//! tested against a synthetic fact set. A rule declares up front which
//! catalog names it may emit; the checker builder validates those
//! declarations against the diagnostic catalog at construction time.

use crate::facts::{MetapackageFacts, SclReadyFacts};
use crate::types::Diagnostic;

/// A validation rule over an SCL metapackage's extracted facts.
///
/// Rules are independent: evaluation order is diagnostic-emission order
/// only, and rules never read each other's diagnostics.
pub trait MetapackageRule: Send + Sync {
    /// Returns the kebab-case name of this rule.
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the closed list of diagnostic names this rule may emit.
    fn diagnostics(&self) -> &'static [&'static str];

    /// Checks the facts and returns any diagnostics found.
    fn check(&self, facts: &MetapackageFacts) -> Vec<Diagnostic>;
}

/// Type alias for boxed [`MetapackageRule`] trait objects.
pub type MetapackageRuleBox = Box<dyn MetapackageRule>;

/// A validation rule over an SCL-ready package's extracted facts.
pub trait SclReadyRule: Send + Sync {
    /// Returns the kebab-case name of this rule.
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the closed list of diagnostic names this rule may emit.
    fn diagnostics(&self) -> &'static [&'static str];

    /// Checks the facts and returns any diagnostics found.
    fn check(&self, facts: &SclReadyFacts) -> Vec<Diagnostic>;
}

/// Type alias for boxed [`SclReadyRule`] trait objects.
pub type SclReadyRuleBox = Box<dyn SclReadyRule>;

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRule;

    impl MetapackageRule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }
        fn diagnostics(&self) -> &'static [&'static str] {
            &["no-runtime-in-scl-metapackage"]
        }
        fn check(&self, facts: &MetapackageFacts) -> Vec<Diagnostic> {
            if facts.runtime.is_none() {
                vec![Diagnostic::error("no-runtime-in-scl-metapackage")]
            } else {
                Vec::new()
            }
        }
    }

    #[test]
    fn rule_trait_is_object_safe() {
        let rule: MetapackageRuleBox = Box::new(TestRule);
        assert_eq!(rule.name(), "test-rule");
        let diagnostics = rule.check(&MetapackageFacts::default());
        assert_eq!(diagnostics.len(), 1);
    }
}
