use crate::checker::{Check, CheckContext, CheckResult};
use crate::config::StructureConfig;
use crate::error::CheckError;

/// Every required directory must exist under the project root.
pub struct StructureCheck {
    config: StructureConfig,
}

impl StructureCheck {
    #[must_use]
    pub const fn new(config: StructureConfig) -> Self {
        Self { config }
    }
}

impl Check for StructureCheck {
    fn name(&self) -> &'static str {
        "Project Structure"
    }

    fn run(&self, ctx: &mut CheckContext<'_>) -> Result<CheckResult, CheckError> {
        let missing: Vec<String> = self
            .config
            .required_dirs
            .iter()
            .filter(|dir| !ctx.resolve(dir).is_dir())
            .cloned()
            .collect();

        if !missing.is_empty() {
            return Ok(CheckResult::fail(format!(
                "Missing required directories: {}",
                missing.join(", ")
            ))
            .with_detail("missing", missing));
        }

        Ok(CheckResult::pass(format!(
            "All required directories present ({} checked)",
            self.config.required_dirs.len()
        )))
    }
}

#[cfg(test)]
#[path = "structure_tests.rs"]
mod tests;
