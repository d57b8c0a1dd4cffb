use crate::checker::AuditReport;
use crate::error::Result;

use super::OutputFormatter;

/// Renders the structured report written to `audit_report.json`.
///
/// Mirrors the text report but keeps every detail list in full.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
