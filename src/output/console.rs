use std::io::Write;
use std::path::Path;

use serde_json::Value;

use crate::checker::{AuditReport, CheckResult, RunObserver};

use super::text::scalar;

const RULE_WIDTH: usize = 70;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    #[must_use]
    pub fn should_use_colors(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

/// Streams run progress and the final summary to a terminal.
///
/// In quiet mode only the closing status line is printed.
pub struct ConsoleReporter<W: Write> {
    out: W,
    use_colors: bool,
    quiet: bool,
}

impl ConsoleReporter<std::io::Stdout> {
    #[must_use]
    pub fn stdout(mode: ColorMode, quiet: bool) -> Self {
        Self::new(std::io::stdout(), mode.should_use_colors(), quiet)
    }
}

impl<W: Write> ConsoleReporter<W> {
    #[must_use]
    pub const fn new(out: W, use_colors: bool, quiet: bool) -> Self {
        Self {
            out,
            use_colors,
            quiet,
        }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    pub fn start(&mut self) {
        if self.quiet {
            return;
        }
        writeln!(self.out, "🔍 Starting Build, Validate, and Audit Process...\n").ok();
    }

    pub fn summary(&mut self, report: &AuditReport) {
        if self.quiet {
            return;
        }
        let rule = "=".repeat(RULE_WIDTH);
        let passed = self.colorize(&report.passed_checks().to_string(), ansi::GREEN);
        let failed = self.colorize(&report.failed_checks().to_string(), ansi::RED);

        writeln!(self.out, "\n{rule}").ok();
        writeln!(self.out, "AUDIT SUMMARY").ok();
        writeln!(self.out, "{rule}").ok();
        writeln!(self.out, "Total Checks: {}", report.total_checks()).ok();
        writeln!(self.out, "✅ Passed: {passed}").ok();
        writeln!(self.out, "❌ Failed: {failed}").ok();
        writeln!(self.out, "{rule}").ok();
    }

    pub fn saved(&mut self, label: &str, path: &Path) {
        if self.quiet {
            return;
        }
        writeln!(self.out, "📄 {label} saved to: {}", path.display()).ok();
    }

    /// Closing line; printed even in quiet mode.
    pub fn finish(&mut self, report: &AuditReport) {
        if report.is_success() {
            let text = self.colorize("All validation checks passed!", ansi::GREEN);
            writeln!(self.out, "\n✅ {text}").ok();
        } else {
            let text = self.colorize(
                "Some validation checks failed. Please review the report.",
                ansi::YELLOW,
            );
            writeln!(self.out, "\n⚠️  {text}").ok();
        }
    }

    fn detail_line(&mut self, key: &str, value: &Value) {
        let rendered = match value {
            Value::Array(items) => items.iter().map(scalar).collect::<Vec<_>>().join(", "),
            other => scalar(other),
        };
        writeln!(self.out, "     {key}: {rendered}").ok();
    }
}

impl<W: Write> RunObserver for ConsoleReporter<W> {
    fn check_started(&mut self, name: &str) {
        if self.quiet {
            return;
        }
        writeln!(self.out, "✓ Checking {name}...").ok();
    }

    fn check_finished(&mut self, name: &str, result: &CheckResult) {
        if self.quiet {
            return;
        }
        if result.passed() {
            let status = self.colorize("PASSED", ansi::GREEN);
            writeln!(self.out, "  ✅ {name}: {status}").ok();
            if !result.message().is_empty() {
                writeln!(self.out, "     {}", result.message()).ok();
            }
        } else {
            let status = self.colorize("FAILED", ansi::RED);
            writeln!(self.out, "  ❌ {name}: {status}").ok();
            writeln!(self.out, "     {}", result.message()).ok();
            for (key, value) in result.details() {
                self.detail_line(key, value);
            }
        }
        writeln!(self.out).ok();
    }

    fn warning(&mut self, _name: &str, warning: &str) {
        if self.quiet {
            return;
        }
        let text = self.colorize(warning, ansi::YELLOW);
        writeln!(self.out, "  ⚠️  {text}").ok();
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
