use std::path::{Path, PathBuf};

use tracing::debug;

use crate::analyze::module::{scan_module, ModuleScan};
use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use crate::scan::list_modules;

/// Every module under the sources root, in module name order.
#[derive(Debug, Clone)]
pub struct ApiMap {
    pub root: PathBuf,
    pub sources_root: PathBuf,
    pub modules: Vec<ModuleScan>,
}

/// Scan all modules below `<root>/libs/hive/Sources`.
///
/// Fails before touching any module if the sources root is missing, and
/// aborts on the first unreadable file or directory.
pub fn build_api_map(root: &Path, config: &ScanConfig) -> Result<ApiMap> {
    let sources_root = config.sources_root(root);
    if !sources_root.exists() {
        return Err(ScanError::SourcesRootMissing(sources_root));
    }

    let module_dirs = list_modules(&sources_root)?;
    debug!(
        "Found {} modules in {}",
        module_dirs.len(),
        sources_root.display()
    );

    let modules = module_dirs
        .iter()
        .map(|dir| scan_module(dir, config))
        .collect::<Result<Vec<_>>>()?;

    Ok(ApiMap {
        root: root.to_path_buf(),
        sources_root,
        modules,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_sources_root() {
        let dir = tempdir().unwrap();
        let err = build_api_map(dir.path(), &ScanConfig::default()).unwrap_err();

        match err {
            ScanError::SourcesRootMissing(path) => {
                assert_eq!(path, dir.path().join("libs/hive/Sources"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_modules_in_name_order() {
        let dir = tempdir().unwrap();
        let sources = dir.path().join("libs/hive/Sources");
        for name in ["HiveRuntime", "HiveCore", "HiveDSL"] {
            fs::create_dir_all(sources.join(name)).unwrap();
        }

        let map = build_api_map(dir.path(), &ScanConfig::default()).unwrap();
        let names: Vec<&str> = map.modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["HiveCore", "HiveDSL", "HiveRuntime"]);
        assert_eq!(map.sources_root, sources);
    }
}
