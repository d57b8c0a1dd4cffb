use serde::{Deserialize, Serialize};

/// Default bound on an external validator run, in seconds.
pub const DEFAULT_TOOL_TIMEOUT_SECS: u64 = 10;

/// Upper bound accepted for `compose.timeout_secs` (one day).
pub const MAX_TOOL_TIMEOUT_SECS: u64 = 86_400;

/// Default number of detail list items shown in the text report.
pub const DEFAULT_DETAIL_LIMIT: usize = 5;

/// Default number of syntax errors kept in the check details.
pub const DEFAULT_MAX_SYNTAX_ERRORS: usize = 10;

/// Top-level audit configuration, read from `.scaffold-audit.toml`.
///
/// Every section falls back to its defaults, so a config file only needs
/// to list what it changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AuditConfig {
    pub structure: StructureConfig,
    pub dependencies: DependencyConfig,
    pub compose: ComposeConfig,
    pub configs: StructuredConfigFiles,
    pub syntax: SyntaxConfig,
    pub required_files: RequiredFilesConfig,
    pub scripts: ScriptConfig,
    pub report: ReportConfig,
}

/// Directories that must exist under the project root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StructureConfig {
    pub required_dirs: Vec<String>,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            required_dirs: strings(&[
                "notebooks",
                "notebooks/scripts",
                "notebooks/configs",
                "deploy",
                "docs",
            ]),
        }
    }
}

/// How the dependency manifest is inspected.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ManifestMode {
    /// Parse the manifest as TOML and read the dependency tables.
    #[default]
    Toml,
    /// Plain substring search over the manifest text.
    Text,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DependencyConfig {
    pub manifest: String,
    pub required: Vec<String>,
    pub mode: ManifestMode,
}

impl Default for DependencyConfig {
    fn default() -> Self {
        Self {
            manifest: "pyproject.toml".to_string(),
            required: strings(&[
                "garak",
                "huggingface_hub",
                "vllm",
                "datasets",
                "wildguard",
            ]),
            mode: ManifestMode::Toml,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ComposeConfig {
    pub files: Vec<String>,

    /// Validator command line; the compose file path is appended.
    /// An empty list disables external validation.
    pub validator: Vec<String>,

    pub timeout_secs: u64,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            files: strings(&[
                "deploy/docker-compose.yaml",
                "deploy/docker-compose-guardrails.yaml",
            ]),
            validator: strings(&["docker", "compose", "config", "--file"]),
            timeout_secs: DEFAULT_TOOL_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StructuredConfigFiles {
    pub files: Vec<String>,
}

impl Default for StructuredConfigFiles {
    fn default() -> Self {
        Self {
            files: strings(&[
                "notebooks/configs/garak_base_config.yaml",
                "notebooks/configs/deepseek_sft.yaml",
            ]),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SyntaxConfig {
    /// File extension (without the dot) of the sources to parse.
    pub extension: String,

    /// Directory name patterns pruned from the walk.
    pub exclude_dirs: Vec<String>,

    pub max_errors: usize,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            extension: "py".to_string(),
            exclude_dirs: strings(&[".git", "__pycache__", ".pytest_cache", "node_modules"]),
            max_errors: DEFAULT_MAX_SYNTAX_ERRORS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RequiredFilesConfig {
    pub files: Vec<String>,
}

impl Default for RequiredFilesConfig {
    fn default() -> Self {
        Self {
            files: strings(&[
                "README.md",
                "pyproject.toml",
                "LICENSE",
                "notebooks/README.md",
                "notebooks/Step0_Setup.ipynb",
                "notebooks/Step1_Evaluation.ipynb",
                "notebooks/Step2_Safety_Post_Training.ipynb",
                "notebooks/Step3_Post_Training_Eval.ipynb",
                "notebooks/Step4_Run_Inference_with_NeMo_Guardrails_Docker.ipynb",
            ]),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScriptConfig {
    pub extension: String,
    pub exclude_dirs: Vec<String>,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            extension: "sh".to_string(),
            exclude_dirs: strings(&[".git"]),
        }
    }
}

/// Report artifact names (relative to the project root) and rendering knobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    pub text_file: String,
    pub json_file: String,
    pub detail_limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            text_file: "audit_report.txt".to_string(),
            json_file: "audit_report.json".to_string(),
            detail_limit: DEFAULT_DETAIL_LIMIT,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
