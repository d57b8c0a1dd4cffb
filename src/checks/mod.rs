//! The built-in scaffold checks, in their default execution order.

mod compose;
mod configs;
mod dependencies;
mod permissions;
mod required_files;
mod structure;
mod syntax;

pub use compose::ComposeCheck;
pub use configs::{StructuredConfigCheck, StructuredFormat};
pub use dependencies::DependencyCheck;
pub use permissions::ScriptPermissionsCheck;
pub use required_files::RequiredFilesCheck;
pub use structure::StructureCheck;
pub use syntax::{SyntaxCheck, check_source};

use crate::checker::Check;
use crate::config::AuditConfig;
use crate::error::Result;

/// Build the standard check list from `config`.
///
/// `external` controls whether the compose check may shell out to its
/// validator.
///
/// # Errors
/// Returns an error if an exclude pattern in the config is invalid.
pub fn default_checks(config: &AuditConfig, external: bool) -> Result<Vec<Box<dyn Check>>> {
    Ok(vec![
        Box::new(StructureCheck::new(config.structure.clone())),
        Box::new(DependencyCheck::new(config.dependencies.clone())),
        Box::new(ComposeCheck::new(config.compose.clone()).with_external(external)),
        Box::new(StructuredConfigCheck::new(config.configs.clone())),
        Box::new(SyntaxCheck::new(&config.syntax)?),
        Box::new(RequiredFilesCheck::new(config.required_files.clone())),
        Box::new(ScriptPermissionsCheck::new(&config.scripts)?),
    ])
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
