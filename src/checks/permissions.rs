use std::path::Path;

use crate::checker::{Check, CheckContext, CheckResult};
use crate::config::ScriptConfig;
use crate::error::CheckError;
use crate::scanner::{DirectoryScanner, ExtensionFilter, FileScanner};

/// Shell scripts under the tree must carry an execute bit.
pub struct ScriptPermissionsCheck {
    scanner: DirectoryScanner<ExtensionFilter>,
}

impl ScriptPermissionsCheck {
    /// # Errors
    /// Returns an error if an exclude pattern is not a valid glob.
    pub fn new(config: &ScriptConfig) -> crate::Result<Self> {
        let filter = ExtensionFilter::new(config.extension.as_str(), &config.exclude_dirs)?;
        Ok(Self {
            scanner: DirectoryScanner::new(filter),
        })
    }
}

impl Check for ScriptPermissionsCheck {
    fn name(&self) -> &'static str {
        "Script Permissions"
    }

    fn run(&self, ctx: &mut CheckContext<'_>) -> Result<CheckResult, CheckError> {
        let scripts = self.scanner.scan(ctx.root());
        if scripts.is_empty() {
            return Ok(CheckResult::pass("No shell scripts found (skipped)"));
        }

        let mut missing_exec = Vec::new();
        for script in &scripts {
            let rel = ctx.relative(script);
            let executable = is_executable(script)
                .map_err(|e| CheckError::io(format!("Error reading {rel}"), e))?;
            if !executable {
                missing_exec.push(rel);
            }
        }

        if !missing_exec.is_empty() {
            return Ok(CheckResult::fail(format!(
                "Scripts missing execute permissions: {}",
                missing_exec.join(", ")
            ))
            .with_detail("scripts", missing_exec));
        }

        Ok(CheckResult::pass(format!(
            "All shell scripts have execute permissions ({} checked)",
            scripts.len()
        )))
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> std::io::Result<bool> {
    use std::os::unix::fs::PermissionsExt;

    Ok(std::fs::metadata(path)?.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> std::io::Result<bool> {
    std::fs::metadata(path).map(|_| true)
}

#[cfg(test)]
#[path = "permissions_tests.rs"]
mod tests;
