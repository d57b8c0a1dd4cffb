use std::time::Duration;

use crate::checker::{Check, CheckContext, CheckResult};
use crate::config::ComposeConfig;
use crate::error::CheckError;
use crate::process::{run_with_timeout, truncate_chars};

/// Characters of validator stderr kept in an error entry.
const STDERR_EXCERPT_CHARS: usize = 200;

/// Compose files must exist, be valid YAML, and pass the external
/// validator when one is installed.
pub struct ComposeCheck {
    config: ComposeConfig,
    external: bool,
}

impl ComposeCheck {
    #[must_use]
    pub const fn new(config: ComposeConfig) -> Self {
        Self {
            config,
            external: true,
        }
    }

    /// Enable or disable the external validator.
    #[must_use]
    pub const fn with_external(mut self, external: bool) -> Self {
        self.external = external;
        self
    }

    fn validator(&self) -> Option<(&str, &[String])> {
        if !self.external {
            return None;
        }
        self.config
            .validator
            .split_first()
            .map(|(program, args)| (program.as_str(), args))
    }

    /// Run the validator on one file. Returns `false` once the tool turned
    /// out to be missing, so the remaining files skip it.
    fn validate_external(
        &self,
        ctx: &mut CheckContext<'_>,
        file: &str,
        errors: &mut Vec<String>,
    ) -> bool {
        let Some((program, base_args)) = self.validator() else {
            return false;
        };

        let mut args = base_args.to_vec();
        args.push(ctx.resolve(file).to_string_lossy().into_owned());
        let timeout = Duration::from_secs(self.config.timeout_secs);

        match run_with_timeout(program, &args, timeout) {
            Ok(output) if output.success() => true,
            Ok(output) => {
                errors.push(format!(
                    "Invalid docker-compose syntax in {file}: {}",
                    truncate_chars(&output.stderr, STDERR_EXCERPT_CHARS)
                ));
                true
            }
            Err(err @ CheckError::ToolUnavailable { .. }) => {
                ctx.warn(format!("{err}, skipped external compose validation"));
                false
            }
            Err(CheckError::Timeout { .. }) => {
                ctx.warn(format!("Timeout validating {file}"));
                true
            }
            Err(err) => {
                ctx.warn(format!("Could not run validator on {file}: {err}"));
                true
            }
        }
    }
}

impl Check for ComposeCheck {
    fn name(&self) -> &'static str {
        "Docker Compose Files"
    }

    fn run(&self, ctx: &mut CheckContext<'_>) -> Result<CheckResult, CheckError> {
        let mut errors = Vec::new();
        let mut validator_available = self.validator().is_some();

        for file in &self.config.files {
            let path = ctx.resolve(file);
            if !path.is_file() {
                errors.push(format!("Missing: {file}"));
                continue;
            }

            let content = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    errors.push(format!("Error reading {file}: {e}"));
                    continue;
                }
            };
            if let Err(e) = serde_yaml::from_str::<serde_yaml::Value>(&content) {
                errors.push(format!("Invalid YAML in {file}: {e}"));
                continue;
            }

            if validator_available {
                validator_available = self.validate_external(ctx, file, &mut errors);
            }
        }

        if !errors.is_empty() {
            return Ok(CheckResult::fail("Docker Compose validation failed")
                .with_detail("errors", errors));
        }

        Ok(CheckResult::pass(format!(
            "All Docker Compose files valid ({} checked)",
            self.config.files.len()
        )))
    }
}

#[cfg(test)]
#[path = "compose_tests.rs"]
mod tests;
