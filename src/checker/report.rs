use chrono::Local;
use indexmap::IndexMap;
use serde::Serialize;

use super::CheckResult;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Aggregate of every check result in a run.
///
/// Results are only added through [`AuditReport::record`], which keeps the
/// counters and the error list consistent with `results`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    timestamp: String,
    #[serde(rename = "total_checks")]
    total: usize,
    #[serde(rename = "passed_checks")]
    passed: usize,
    #[serde(rename = "failed_checks")]
    failed: usize,
    warnings: Vec<String>,
    errors: Vec<String>,
    results: IndexMap<String, CheckResult>,
}

impl AuditReport {
    #[must_use]
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            total: 0,
            passed: 0,
            failed: 0,
            warnings: Vec::new(),
            errors: Vec::new(),
            results: IndexMap::new(),
        }
    }

    /// Report stamped with the current local time.
    #[must_use]
    pub fn now() -> Self {
        Self::new(Local::now().format(TIMESTAMP_FORMAT).to_string())
    }

    /// Add the result of one check. A repeated name gets a numeric suffix
    /// so no earlier result is overwritten.
    pub fn record(&mut self, name: &str, result: CheckResult) {
        let key = self.unique_key(name);
        self.total += 1;
        if result.passed() {
            self.passed += 1;
        } else {
            self.failed += 1;
            self.errors.push(format!("{key}: {}", result.message()));
        }
        self.results.insert(key, result);
    }

    /// Record a soft failure. Warnings never touch the counters.
    pub fn warn(&mut self, name: &str, warning: &str) {
        self.warnings.push(format!("{name}: {warning}"));
    }

    fn unique_key(&self, name: &str) -> String {
        if !self.results.contains_key(name) {
            return name.to_string();
        }
        (2..)
            .map(|n| format!("{name} ({n})"))
            .find(|candidate| !self.results.contains_key(candidate))
            .unwrap_or_else(|| name.to_string())
    }

    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    #[must_use]
    pub const fn total_checks(&self) -> usize {
        self.total
    }

    #[must_use]
    pub const fn passed_checks(&self) -> usize {
        self.passed
    }

    #[must_use]
    pub const fn failed_checks(&self) -> usize {
        self.failed
    }

    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    #[must_use]
    pub const fn results(&self) -> &IndexMap<String, CheckResult> {
        &self.results
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed == 0
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
