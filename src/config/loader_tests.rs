use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::*;
use crate::config::ManifestMode;

#[derive(Default)]
struct MockFileSystem {
    files: HashMap<PathBuf, String>,
}

impl MockFileSystem {
    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found")
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

#[test]
fn load_returns_defaults_without_config_file() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::default());
    let config = loader.load(Path::new("/project")).unwrap();
    assert_eq!(config, AuditConfig::default());
}

#[test]
fn load_reads_local_config_from_project_root() {
    let fs = MockFileSystem::default().with_file(
        "/project/.scaffold-audit.toml",
        "[dependencies]\nmode = \"text\"\nrequired = [\"requests\"]\n",
    );
    let loader = FileConfigLoader::with_fs(fs);
    let config = loader.load(Path::new("/project")).unwrap();
    assert_eq!(config.dependencies.mode, ManifestMode::Text);
    assert_eq!(config.dependencies.required, vec!["requests"]);
}

#[test]
fn load_from_path_missing_file_is_file_read_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::default());
    let err = loader
        .load_from_path(Path::new("/elsewhere/audit.toml"))
        .unwrap_err();
    assert!(matches!(err, AuditError::FileRead { .. }));
}

#[test]
fn load_from_path_invalid_toml_is_parse_error() {
    let fs = MockFileSystem::default().with_file("/c.toml", "[structure\nrequired_dirs = 1");
    let loader = FileConfigLoader::with_fs(fs);
    let err = loader.load_from_path(Path::new("/c.toml")).unwrap_err();
    assert!(matches!(err, AuditError::TomlParse(_)));
}

#[test]
fn load_rejects_zero_timeout() {
    let fs = MockFileSystem::default().with_file("/c.toml", "[compose]\ntimeout_secs = 0\n");
    let loader = FileConfigLoader::with_fs(fs);
    let err = loader.load_from_path(Path::new("/c.toml")).unwrap_err();
    assert!(err.to_string().contains("timeout_secs"));
}

#[test]
fn load_rejects_timeout_beyond_bound() {
    let fs = MockFileSystem::default().with_file(
        "/c.toml",
        "[compose]\ntimeout_secs = 9223372036854775807\n",
    );
    let loader = FileConfigLoader::with_fs(fs);
    let err = loader.load_from_path(Path::new("/c.toml")).unwrap_err();
    assert!(matches!(err, AuditError::Config(_)));
    assert!(err.to_string().contains("at most 86400"), "{err}");
}

#[test]
fn validate_accepts_timeout_at_bound() {
    let mut config = AuditConfig::default();
    config.compose.timeout_secs = MAX_TOOL_TIMEOUT_SECS;
    assert!(validate_config(&config).is_ok());
}

#[test]
fn validate_rejects_zero_detail_limit() {
    let mut config = AuditConfig::default();
    config.report.detail_limit = 0;
    assert!(matches!(
        validate_config(&config),
        Err(AuditError::Config(_))
    ));
}

#[test]
fn validate_rejects_blank_validator_program() {
    let mut config = AuditConfig::default();
    config.compose.validator = vec![" ".to_string()];
    assert!(validate_config(&config).is_err());
}

#[test]
fn validate_rejects_empty_extension() {
    let mut config = AuditConfig::default();
    config.scripts.extension = String::new();
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("scripts.extension"));
}

#[test]
fn validate_rejects_invalid_exclude_glob() {
    let mut config = AuditConfig::default();
    config.syntax.exclude_dirs.push("[unclosed".to_string());
    assert!(matches!(
        validate_config(&config),
        Err(AuditError::InvalidPattern { .. })
    ));
}

#[test]
fn validate_accepts_defaults() {
    assert!(validate_config(&AuditConfig::default()).is_ok());
}
