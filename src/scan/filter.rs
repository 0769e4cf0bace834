use std::ffi::OsStr;
use std::path::Path;

use crate::config::ScanConfig;

/// True if `path` carries the configured source extension (case-sensitive).
pub fn has_source_extension(path: &Path, config: &ScanConfig) -> bool {
    path.extension().and_then(OsStr::to_str) == Some(config.extension.as_str())
}

/// True if any segment of `path` names an excluded build/tooling directory.
pub fn is_excluded_path(path: &Path, config: &ScanConfig) -> bool {
    path.components()
        .filter_map(|c| c.as_os_str().to_str())
        .any(|segment| config.is_excluded_dir(segment))
}

pub(super) fn is_excluded_name(name: &OsStr, config: &ScanConfig) -> bool {
    name.to_str()
        .map(|n| config.is_excluded_dir(n))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_source_extension() {
        let config = ScanConfig::default();
        assert!(has_source_extension(Path::new("Sources/A/Widget.swift"), &config));
        assert!(!has_source_extension(Path::new("Sources/A/Widget.SWIFT"), &config));
        assert!(!has_source_extension(Path::new("Sources/A/Package.resolved"), &config));
        assert!(!has_source_extension(Path::new("Sources/A/swift"), &config));
    }

    #[test]
    fn test_is_excluded_path() {
        let config = ScanConfig::default();
        assert!(is_excluded_path(Path::new("ModA/.build/debug/A.swift"), &config));
        assert!(is_excluded_path(Path::new("ModA/.Build/A.swift"), &config));
        assert!(is_excluded_path(Path::new("ModA/.swiftpm/x/A.swift"), &config));
        assert!(!is_excluded_path(Path::new("ModA/build/A.swift"), &config));
        assert!(!is_excluded_path(Path::new("ModA/my.build.swift"), &config));
    }
}
