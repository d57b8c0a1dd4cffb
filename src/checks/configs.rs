use std::path::Path;

use crate::checker::{Check, CheckContext, CheckResult};
use crate::config::StructuredConfigFiles;
use crate::error::CheckError;

/// Structured-data formats recognised by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuredFormat {
    Yaml,
    Json,
    Toml,
}

impl StructuredFormat {
    /// Pick the format from the extension; anything unknown is read as YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
            Self::Toml => "TOML",
        }
    }

    /// Parse `content`, discarding the value.
    ///
    /// # Errors
    /// Returns the parser's error message.
    pub fn validate(self, content: &str) -> Result<(), String> {
        match self {
            Self::Yaml => serde_yaml::from_str::<serde_yaml::Value>(content)
                .map(drop)
                .map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str::<serde_json::Value>(content)
                .map(drop)
                .map_err(|e| e.to_string()),
            Self::Toml => toml::from_str::<toml::Table>(content)
                .map(drop)
                .map_err(|e| e.to_string()),
        }
    }
}

/// Every listed configuration file must exist and parse.
pub struct StructuredConfigCheck {
    config: StructuredConfigFiles,
}

impl StructuredConfigCheck {
    #[must_use]
    pub const fn new(config: StructuredConfigFiles) -> Self {
        Self { config }
    }
}

impl Check for StructuredConfigCheck {
    fn name(&self) -> &'static str {
        "YAML Configurations"
    }

    fn run(&self, ctx: &mut CheckContext<'_>) -> Result<CheckResult, CheckError> {
        let mut errors = Vec::new();

        for file in &self.config.files {
            let path = ctx.resolve(file);
            if !path.is_file() {
                errors.push(format!("Missing: {file}"));
                continue;
            }

            let format = StructuredFormat::from_path(&path);
            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    if let Err(e) = format.validate(&content) {
                        errors.push(format!("Invalid {} in {file}: {e}", format.label()));
                    }
                }
                Err(e) => errors.push(format!("Error reading {file}: {e}")),
            }
        }

        if !errors.is_empty() {
            return Ok(CheckResult::fail("YAML configuration validation failed")
                .with_detail("errors", errors));
        }

        Ok(CheckResult::pass(format!(
            "All YAML configurations valid ({} checked)",
            self.config.files.len()
        )))
    }
}

#[cfg(test)]
#[path = "configs_tests.rs"]
mod tests;
