use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::filter::{has_source_extension, is_excluded_name, is_excluded_path};
use crate::config::ScanConfig;
use crate::error::{Result, ScanError};

/// Directories directly under `sources_root`, sorted by base name.
pub fn list_modules(sources_root: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(sources_root).map_err(|e| ScanError::io(sources_root, e))?;

    let mut modules = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ScanError::io(sources_root, e))?;
        let path = entry.path();
        if path.is_dir() {
            modules.push(path);
        }
    }

    modules.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(modules)
}

/// Lazily walk `module_dir` for eligible source files.
///
/// Excluded directories are pruned rather than filtered afterwards, so
/// nothing below them is visited. Each call performs a fresh walk.
pub fn discover_files<'a>(
    module_dir: &Path,
    config: &'a ScanConfig,
) -> impl Iterator<Item = Result<PathBuf>> + 'a {
    let module_excluded = module_dir
        .file_name()
        .map(|name| is_excluded_path(Path::new(name), config))
        .unwrap_or(false);

    WalkDir::new(module_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| !is_excluded_name(entry.file_name(), config))
        .filter_map(move |entry| match entry {
            Ok(_) if module_excluded => None,
            Ok(entry) => {
                // Symlinks are not followed; a dangling one still counts and fails on read.
                let path = entry.path();
                if !entry.file_type().is_dir() && has_source_extension(path, config) {
                    debug!("Source file: {}", path.display());
                    Some(Ok(entry.into_path()))
                } else {
                    None
                }
            }
            Err(err) => Some(Err(ScanError::from(err))),
        })
}

/// Number of eligible files under `module_dir`.
pub fn count_files(module_dir: &Path, config: &ScanConfig) -> Result<usize> {
    discover_files(module_dir, config).try_fold(0, |count, file| file.map(|_| count + 1))
}
