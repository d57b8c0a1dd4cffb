use crate::checker::{Check, CheckContext, CheckResult};
use crate::config::RequiredFilesConfig;
use crate::error::CheckError;

pub struct RequiredFilesCheck {
    config: RequiredFilesConfig,
}

impl RequiredFilesCheck {
    #[must_use]
    pub const fn new(config: RequiredFilesConfig) -> Self {
        Self { config }
    }
}

impl Check for RequiredFilesCheck {
    fn name(&self) -> &'static str {
        "Required Files"
    }

    fn run(&self, ctx: &mut CheckContext<'_>) -> Result<CheckResult, CheckError> {
        let missing: Vec<String> = self
            .config
            .files
            .iter()
            .filter(|file| !ctx.resolve(file).exists())
            .cloned()
            .collect();

        if !missing.is_empty() {
            return Ok(CheckResult::fail(format!(
                "Missing required files: {}",
                missing.join(", ")
            ))
            .with_detail("missing", missing));
        }

        Ok(CheckResult::pass(format!(
            "All required files present ({} checked)",
            self.config.files.len()
        )))
    }
}

#[cfg(test)]
#[path = "required_files_tests.rs"]
mod tests;
