use std::path::{Path, PathBuf};
use std::time::Instant;

use super::{AuditReport, Check, CheckContext, CheckResult};

/// Receives progress events while the runner works through its checks.
pub trait RunObserver {
    fn check_started(&mut self, _name: &str) {}

    fn check_finished(&mut self, _name: &str, _result: &CheckResult) {}

    fn warning(&mut self, _name: &str, _warning: &str) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl RunObserver for SilentObserver {}

/// Runs an ordered list of checks against one project root.
///
/// Lifecycle is construct, `run`, then use the returned report; the runner
/// is consumed by `run`.
pub struct AuditRunner {
    root: PathBuf,
    checks: Vec<Box<dyn Check>>,
}

impl AuditRunner {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, checks: Vec<Box<dyn Check>>) -> Self {
        Self {
            root: root.into(),
            checks,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|check| check.name()).collect()
    }

    /// Execute every check in order and return the finished report.
    ///
    /// A check error never stops the run: it becomes a failing result whose
    /// message is the error text.
    pub fn run(self, observer: &mut dyn RunObserver) -> AuditReport {
        self.run_into(AuditReport::now(), observer)
    }

    /// Same as [`AuditRunner::run`] but records into a caller-supplied report.
    pub fn run_into(self, mut report: AuditReport, observer: &mut dyn RunObserver) -> AuditReport {
        for check in &self.checks {
            let name = check.name();
            observer.check_started(name);

            let started = Instant::now();
            let mut ctx = CheckContext::new(&self.root);
            let result = check.run(&mut ctx).unwrap_or_else(|err| {
                tracing::debug!(check = name, error = %err, "check raised an error");
                CheckResult::fail(err.to_string())
            });
            tracing::debug!(
                check = name,
                passed = result.passed(),
                elapsed_ms = started.elapsed().as_millis(),
                "check finished"
            );

            for warning in ctx.into_warnings() {
                observer.warning(name, &warning);
                report.warn(name, &warning);
            }
            observer.check_finished(name, &result);
            report.record(name, result);
        }
        report
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
