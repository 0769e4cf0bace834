//! Scan settings. There is no configuration file; the CLI builds a
//! [`ScanConfig`] from its defaults and passes it down the pipeline.

use std::path::{Path, PathBuf};

/// Sources root relative to the repository root
pub const DEFAULT_SOURCES_SUBPATH: &[&str] = &["libs", "hive", "Sources"];

/// Source file extension (case-sensitive)
pub const DEFAULT_EXTENSION: &str = "swift";

/// Build/tooling directory names skipped during discovery (compared case-insensitively)
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".build", ".swiftpm"];

/// Maximum declarations listed per module
pub const DEFAULT_LISTING_LIMIT: usize = 60;

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub sources_subpath: Vec<String>,
    pub extension: String,
    /// Stored lowercase
    pub excluded_dirs: Vec<String>,
    pub listing_limit: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            sources_subpath: DEFAULT_SOURCES_SUBPATH
                .iter()
                .map(|s| s.to_string())
                .collect(),
            extension: DEFAULT_EXTENSION.to_string(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
            listing_limit: DEFAULT_LISTING_LIMIT,
        }
    }
}

impl ScanConfig {
    /// `<root>/libs/hive/Sources`
    pub fn sources_root(&self, root: &Path) -> PathBuf {
        self.sources_subpath
            .iter()
            .fold(root.to_path_buf(), |acc, part| acc.join(part))
    }

    pub fn is_excluded_dir(&self, segment: &str) -> bool {
        let segment = segment.to_lowercase();
        self.excluded_dirs.iter().any(|d| *d == segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_root() {
        let config = ScanConfig::default();
        assert_eq!(
            config.sources_root(Path::new("/repo")),
            PathBuf::from("/repo/libs/hive/Sources")
        );
    }

    #[test]
    fn test_excluded_dir_is_case_insensitive() {
        let config = ScanConfig::default();
        assert!(config.is_excluded_dir(".build"));
        assert!(config.is_excluded_dir(".BUILD"));
        assert!(config.is_excluded_dir(".SwiftPM"));
        assert!(!config.is_excluded_dir("build"));
        assert!(!config.is_excluded_dir(".build-tools"));
    }
}
