use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Errors that stop the tool itself from running (bad config, unwritable report).
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {path}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl AuditError {
    /// Short type tag used in diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::InvalidPattern { .. } | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::ReportWrite { .. } => "ReportWrite",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialize",
        }
    }

    /// A hint printed below the error when the fix is obvious.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the config file format, or run with --no-config to use defaults")
            }
            Self::InvalidPattern { .. } => Some("Check the glob syntax of exclude_dirs entries"),
            Self::FileRead { source, .. } | Self::ReportWrite { source, .. } => {
                match source.kind() {
                    std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
                    std::io::ErrorKind::PermissionDenied => Some("Check file permissions"),
                    _ => None,
                }
            }
            Self::Io(_) | Self::JsonSerialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;

/// Failures raised inside a single check.
///
/// The runner downgrades every variant to a failing result (or a warning for
/// the soft kinds), so none of them ever escapes a check.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("{0} not found")]
    MissingResource(String),

    #[error("{context}: {message}")]
    Parse { context: String, message: String },

    #[error("`{program}` is not available")]
    ToolUnavailable { program: String },

    #[error("`{program}` timed out after {}s", .timeout.as_secs())]
    Timeout { program: String, timeout: Duration },

    #[error("{context}: {source}")]
    UnexpectedIo {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl CheckError {
    /// Soft failures are recorded as warnings and never count against a check.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        matches!(self, Self::ToolUnavailable { .. } | Self::Timeout { .. })
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::UnexpectedIo {
            context: context.into(),
            source,
        }
    }

    pub fn parse(context: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            context: context.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
