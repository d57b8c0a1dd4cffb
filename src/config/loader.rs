use std::path::{Path, PathBuf};

use globset::Glob;

use crate::error::{AuditError, Result};

use super::{AuditConfig, MAX_TOOL_TIMEOUT_SECS};

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration for a project, falling back to defaults when the
    /// project carries no config file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read or parsed.
    fn load(&self, project_root: &Path) -> Result<AuditConfig>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<AuditConfig>;
}

pub const LOCAL_CONFIG_NAME: &str = ".scaffold-audit.toml";

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Loads configuration from the filesystem.
///
/// Looks for `.scaffold-audit.toml` in the project root and returns
/// `AuditConfig::default()` if none is found.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(project_root: &Path) -> PathBuf {
        project_root.join(LOCAL_CONFIG_NAME)
    }

    fn parse_config(content: &str) -> Result<AuditConfig> {
        let config: AuditConfig = toml::from_str(content)?;
        validate_config(&config)?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self, project_root: &Path) -> Result<AuditConfig> {
        let path = Self::local_config_path(project_root);
        if self.fs.exists(&path) {
            tracing::debug!(path = %path.display(), "loading project config");
            return self.load_from_path(&path);
        }
        tracing::debug!("no project config found, using defaults");
        Ok(AuditConfig::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<AuditConfig> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| AuditError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse_config(&content)
    }
}

/// Reject values that would make a check meaningless.
///
/// # Errors
/// Returns `AuditError::Config` for zero limits, an oversized timeout, an empty validator program,
/// or a blank extension, and `AuditError::InvalidPattern` for bad globs.
pub fn validate_config(config: &AuditConfig) -> Result<()> {
    if config.compose.timeout_secs == 0 {
        return Err(AuditError::Config(
            "compose.timeout_secs must be greater than 0".to_string(),
        ));
    }
    if config.compose.timeout_secs > MAX_TOOL_TIMEOUT_SECS {
        return Err(AuditError::Config(format!(
            "compose.timeout_secs must be at most {MAX_TOOL_TIMEOUT_SECS}"
        )));
    }
    if config
        .compose
        .validator
        .first()
        .is_some_and(|program| program.trim().is_empty())
    {
        return Err(AuditError::Config(
            "compose.validator must start with a program name".to_string(),
        ));
    }
    if config.report.detail_limit == 0 {
        return Err(AuditError::Config(
            "report.detail_limit must be greater than 0".to_string(),
        ));
    }
    if config.syntax.max_errors == 0 {
        return Err(AuditError::Config(
            "syntax.max_errors must be greater than 0".to_string(),
        ));
    }
    for (section, extension) in [
        ("syntax", &config.syntax.extension),
        ("scripts", &config.scripts.extension),
    ] {
        if extension.trim().is_empty() {
            return Err(AuditError::Config(format!(
                "{section}.extension must not be empty"
            )));
        }
    }
    for pattern in config
        .syntax
        .exclude_dirs
        .iter()
        .chain(&config.scripts.exclude_dirs)
    {
        Glob::new(pattern).map_err(|source| AuditError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
