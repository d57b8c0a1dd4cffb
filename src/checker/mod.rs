mod report;
mod result;
mod runner;

pub use report::AuditReport;
pub use result::CheckResult;
pub use runner::{AuditRunner, RunObserver, SilentObserver};

use std::path::{Path, PathBuf};

use crate::error::CheckError;

/// One independent validation unit.
pub trait Check {
    /// Display name, also used as the report key.
    fn name(&self) -> &'static str;

    /// Run the check against the project in `ctx`.
    ///
    /// # Errors
    /// Any `CheckError` is turned into a failing result by the runner.
    fn run(&self, ctx: &mut CheckContext<'_>) -> Result<CheckResult, CheckError>;
}

/// Per-check view of the project plus a sink for soft failures.
#[derive(Debug)]
pub struct CheckContext<'a> {
    root: &'a Path,
    warnings: Vec<String>,
}

impl<'a> CheckContext<'a> {
    #[must_use]
    pub const fn new(root: &'a Path) -> Self {
        Self {
            root,
            warnings: Vec::new(),
        }
    }

    #[must_use]
    pub const fn root(&self) -> &Path {
        self.root
    }

    /// Absolute path of a project-relative path.
    #[must_use]
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Project-relative display form of `path`, with `/` separators.
    #[must_use]
    pub fn relative(&self, path: &Path) -> String {
        let rel = path.strip_prefix(self.root).unwrap_or(path);
        rel.to_string_lossy().replace('\\', "/")
    }

    pub fn warn(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    #[must_use]
    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
