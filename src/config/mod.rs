mod loader;
mod model;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem,
    validate_config,
};
pub use model::{
    AuditConfig, ComposeConfig, DEFAULT_DETAIL_LIMIT, DEFAULT_MAX_SYNTAX_ERRORS,
    DEFAULT_TOOL_TIMEOUT_SECS, DependencyConfig, MAX_TOOL_TIMEOUT_SECS, ManifestMode,
    ReportConfig, RequiredFilesConfig, ScriptConfig, StructureConfig, StructuredConfigFiles,
    SyntaxConfig,
};
