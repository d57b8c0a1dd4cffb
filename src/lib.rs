pub mod checker;
pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod process;
pub mod scanner;

pub use error::{AuditError, CheckError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CHECKS_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Exit code for a finished report: non-zero iff any check failed.
#[must_use]
pub const fn exit_code_for(report: &checker::AuditReport) -> i32 {
    if report.is_success() {
        EXIT_SUCCESS
    } else {
        EXIT_CHECKS_FAILED
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
