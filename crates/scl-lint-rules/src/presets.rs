//! Rule-set constructors for the built-in engines.

use crate::metapackage::{
    BuildFilesShipRpmMacros, NoAlienSubpackages, NoMainPackageFiles, NoarchLibdirConflict,
    RequireBuildSubpackage, RequireRuntimeSubpackage, RequireSclInstall, RequireSclUtilsBuildBr,
    RuntimeFilesUseSclFiles,
};
use crate::scl_ready::{NameRequiresSclPrefix, RequirePkgNameGuard};
use scl_lint_core::{MetapackageRuleBox, SclReadyRuleBox};

/// Returns the full metapackage rule set, in diagnostic-emission order.
#[must_use]
pub fn metapackage_rules() -> Vec<MetapackageRuleBox> {
    vec![
        Box::new(RequireRuntimeSubpackage),
        Box::new(RequireBuildSubpackage),
        Box::new(NoAlienSubpackages),
        Box::new(RequireSclUtilsBuildBr),
        Box::new(RequireSclInstall),
        Box::new(NoarchLibdirConflict),
        Box::new(NoMainPackageFiles),
        Box::new(RuntimeFilesUseSclFiles),
        Box::new(BuildFilesShipRpmMacros),
    ]
}

/// Returns the full SCL-ready rule set, in diagnostic-emission order.
#[must_use]
pub fn scl_ready_rules() -> Vec<SclReadyRuleBox> {
    vec![Box::new(RequirePkgNameGuard), Box::new(NameRequiresSclPrefix)]
}
