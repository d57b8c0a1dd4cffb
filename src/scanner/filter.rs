use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{AuditError, Result};

pub trait FileFilter {
    /// Whether a file should be yielded.
    fn should_include(&self, path: &Path) -> bool;

    /// Whether the walk should descend into a directory.
    fn should_descend(&self, dir: &Path) -> bool;
}

/// Matches files by extension and prunes directories by name.
///
/// Exclude patterns are globs matched against a single directory name
/// (`.git`, `*.egg-info`), not against the full path.
pub struct ExtensionFilter {
    extension: String,
    exclude_dirs: GlobSet,
}

impl ExtensionFilter {
    /// Create a new filter for `extension` (without the dot).
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extension: impl Into<String>, exclude_dirs: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_dirs {
            let glob = Glob::new(pattern).map_err(|e| AuditError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_dirs = builder.build().map_err(|e| AuditError::InvalidPattern {
            pattern: "combined patterns".to_string(),
            source: e,
        })?;

        Ok(Self {
            extension: extension.into().trim_start_matches('.').to_string(),
            exclude_dirs,
        })
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }
}

impl FileFilter for ExtensionFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_extension(path)
    }

    fn should_descend(&self, dir: &Path) -> bool {
        dir.file_name()
            .is_none_or(|name| !self.exclude_dirs.is_match(Path::new(name)))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
