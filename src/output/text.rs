use std::fmt::Write;

use serde_json::Value;

use crate::checker::{AuditReport, CheckResult};
use crate::config::DEFAULT_DETAIL_LIMIT;
use crate::error::Result;

use super::OutputFormatter;

const RULE_WIDTH: usize = 70;

/// Renders the plain-text audit report written to `audit_report.txt`.
///
/// Output is deterministic and never colored. Detail lists longer than the
/// limit show their first `limit` items and the total count.
pub struct TextFormatter {
    detail_limit: usize,
}

impl TextFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            detail_limit: DEFAULT_DETAIL_LIMIT,
        }
    }

    #[must_use]
    pub const fn with_detail_limit(mut self, limit: usize) -> Self {
        self.detail_limit = limit;
        self
    }

    fn format_result(&self, name: &str, result: &CheckResult, out: &mut String) {
        let status = if result.passed() {
            "✅ PASSED"
        } else {
            "❌ FAILED"
        };
        let _ = writeln!(out);
        let _ = writeln!(out, "{name}: {status}");
        let _ = writeln!(out, "  {}", result.message());
        for (key, value) in result.details() {
            self.format_detail(key, value, out);
        }
    }

    fn format_detail(&self, key: &str, value: &Value, out: &mut String) {
        match value {
            Value::Array(items) if items.len() > self.detail_limit => {
                let _ = writeln!(
                    out,
                    "  {key}: {} items (showing first {})",
                    items.len(),
                    self.detail_limit
                );
                for item in items.iter().take(self.detail_limit) {
                    let _ = writeln!(out, "    - {}", scalar(item));
                }
            }
            Value::Array(_) => {
                let _ = writeln!(out, "  {key}: {value}");
            }
            _ => {
                let _ = writeln!(out, "  {key}: {}", scalar(value));
            }
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();

        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "BUILD, VALIDATE, AND AUDIT REPORT");
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "Timestamp: {}", report.timestamp());
        let _ = writeln!(out, "Total Checks: {}", report.total_checks());
        let _ = writeln!(out, "Passed: {}", report.passed_checks());
        let _ = writeln!(out, "Failed: {}", report.failed_checks());
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out);

        if !report.errors().is_empty() {
            let _ = writeln!(out, "ERRORS:");
            for error in report.errors() {
                let _ = writeln!(out, "  ❌ {error}");
            }
            let _ = writeln!(out);
        }

        if !report.warnings().is_empty() {
            let _ = writeln!(out, "WARNINGS:");
            for warning in report.warnings() {
                let _ = writeln!(out, "  ⚠️  {warning}");
            }
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "DETAILED RESULTS:");
        for (name, result) in report.results() {
            self.format_result(name, result, &mut out);
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{rule}");
        Ok(out)
    }
}

/// Strings print without quotes; everything else uses its JSON form.
pub(super) fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
