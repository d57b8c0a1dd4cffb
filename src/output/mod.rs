mod console;
mod json;
mod text;

pub use console::{ColorMode, ConsoleReporter};
pub use json::JsonFormatter;
pub use text::TextFormatter;

use std::fs;
use std::path::{Path, PathBuf};

use crate::checker::AuditReport;
use crate::config::ReportConfig;
use crate::error::{AuditError, Result};

/// Trait for formatting an audit report into various output formats.
pub trait OutputFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &AuditReport) -> Result<String>;
}

/// Paths of the artifacts written by [`write_reports`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReports {
    pub text: PathBuf,
    pub json: PathBuf,
}

/// Write the text and JSON reports under `root`, replacing earlier runs.
///
/// # Errors
/// Returns an error if rendering fails or either file cannot be written.
pub fn write_reports(
    root: &Path,
    report: &AuditReport,
    config: &ReportConfig,
) -> Result<WrittenReports> {
    let text = TextFormatter::new()
        .with_detail_limit(config.detail_limit)
        .format(report)?;
    let json = JsonFormatter.format(report)?;

    let written = WrittenReports {
        text: root.join(&config.text_file),
        json: root.join(&config.json_file),
    };
    write_file(&written.text, &text)?;
    write_file(&written.json, &json)?;
    Ok(written)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| AuditError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "report written");
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
