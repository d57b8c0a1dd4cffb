use indexmap::IndexSet;

use crate::checker::{Check, CheckContext, CheckResult};
use crate::config::{DependencyConfig, ManifestMode};
use crate::error::CheckError;

/// The dependency manifest must declare every required package.
pub struct DependencyCheck {
    config: DependencyConfig,
}

impl DependencyCheck {
    #[must_use]
    pub const fn new(config: DependencyConfig) -> Self {
        Self { config }
    }

    fn check_parsed(&self, content: &str) -> Result<CheckResult, CheckError> {
        let manifest = &self.config.manifest;
        let doc: toml::Table = toml::from_str(content)
            .map_err(|e| CheckError::parse(format!("Error reading {manifest}"), e))?;

        let declared = declared_dependencies(&doc);
        if declared.is_empty() {
            return Ok(CheckResult::fail(format!(
                "No dependencies found in {manifest}"
            )));
        }

        let missing: Vec<String> = self
            .config
            .required
            .iter()
            .filter(|dep| !declared.contains(&normalize_name(dep)))
            .cloned()
            .collect();

        if !missing.is_empty() {
            return Ok(CheckResult::fail(format!(
                "Missing required dependencies: {}",
                missing.join(", ")
            ))
            .with_detail("missing", missing)
            .with_detail("total", declared.len()));
        }

        Ok(CheckResult::pass(format!(
            "All required dependencies present ({} checked, {} total)",
            self.config.required.len(),
            declared.len()
        ))
        .with_detail("total_dependencies", declared.len()))
    }

    /// Substring search over the raw text. A name mentioned in a comment
    /// satisfies the check.
    fn check_text(&self, content: &str) -> CheckResult {
        let manifest = &self.config.manifest;
        let missing: Vec<&str> = self
            .config
            .required
            .iter()
            .map(String::as_str)
            .filter(|dep| !content.contains(dep))
            .collect();

        if !missing.is_empty() {
            return CheckResult::fail(format!(
                "Could not parse {manifest} properly. Missing deps: {}",
                missing.join(", ")
            ));
        }

        CheckResult::pass(format!(
            "Dependencies found in {manifest} (basic string check)"
        ))
    }
}

impl Check for DependencyCheck {
    fn name(&self) -> &'static str {
        "Python Dependencies"
    }

    fn run(&self, ctx: &mut CheckContext<'_>) -> Result<CheckResult, CheckError> {
        let manifest = &self.config.manifest;
        let path = ctx.resolve(manifest);
        if !path.is_file() {
            return Err(CheckError::MissingResource(manifest.clone()));
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| CheckError::io(format!("Error reading {manifest}"), e))?;

        match self.config.mode {
            ManifestMode::Toml => self.check_parsed(&content),
            ManifestMode::Text => {
                tracing::debug!(manifest = %manifest, "using text scan for dependencies");
                Ok(self.check_text(&content))
            }
        }
    }
}

/// Normalized names declared in `[tool.poetry.dependencies]` (table keys)
/// and `[project] dependencies` (requirement strings).
fn declared_dependencies(doc: &toml::Table) -> IndexSet<String> {
    let mut declared = IndexSet::new();

    if let Some(poetry) = doc
        .get("tool")
        .and_then(|tool| tool.get("poetry"))
        .and_then(|poetry| poetry.get("dependencies"))
        .and_then(toml::Value::as_table)
    {
        declared.extend(poetry.keys().map(|name| normalize_name(name)));
    }

    if let Some(project) = doc
        .get("project")
        .and_then(|project| project.get("dependencies"))
        .and_then(toml::Value::as_array)
    {
        declared.extend(
            project
                .iter()
                .filter_map(toml::Value::as_str)
                .map(requirement_name)
                .filter(|name| !name.is_empty())
                .map(normalize_name),
        );
    }

    declared
}

/// Package name of a requirement string such as `vllm[extra]>=0.4; python_version>"3.9"`.
fn requirement_name(requirement: &str) -> &str {
    let trimmed = requirement.trim_start();
    let end = trimmed
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        .unwrap_or(trimmed.len());
    &trimmed[..end]
}

/// Package names compare case-insensitively with `-`, `_` and `.` folded together.
fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '-' | '.' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

#[cfg(test)]
#[path = "dependencies_tests.rs"]
mod tests;
