//! Per-module aggregation of public declarations.
//!
//! A module is a directory directly under the sources root. Its declarations
//! are collected from every eligible file, de-duplicated by (kind, name) and
//! sorted for display.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::analyze::lang::{LanguageParser, SwiftParser};
use crate::analyze::source::read_source;
use crate::config::ScanConfig;
use crate::error::Result;
use crate::scan::{count_files, discover_files};
use crate::types::Declaration;

/// Aggregated declarations of one module
#[derive(Debug, Clone)]
pub struct ModuleScan {
    /// Directory base name
    pub name: String,
    pub path: PathBuf,
    /// Eligible files after exclusion
    pub file_count: usize,
    /// Unique by (kind, name), sorted by (kind, name)
    pub declarations: Vec<Declaration>,
}

impl ModuleScan {
    pub fn unique_count(&self) -> usize {
        self.declarations.len()
    }

    /// The first `limit` declarations, as shown in reports.
    pub fn listed(&self, limit: usize) -> &[Declaration] {
        &self.declarations[..self.declarations.len().min(limit)]
    }

    /// Declarations left out of the listing by `limit`.
    pub fn overflow(&self, limit: usize) -> usize {
        self.declarations.len().saturating_sub(limit)
    }
}

/// Scan one module directory.
pub fn scan_module(module_dir: &Path, config: &ScanConfig) -> Result<ModuleScan> {
    let name = module_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let parser = SwiftParser;
    let mut found = Vec::new();
    for file in discover_files(module_dir, config) {
        let file = file?;
        let content = read_source(&file)?;
        found.extend(parser.parse_declarations(&file, &content));
    }

    let mut declarations = dedupe_declarations(found);
    sort_declarations(&mut declarations);

    let file_count = count_files(module_dir, config)?;

    debug!(
        "Module {}: {} files, {} unique declarations",
        name,
        file_count,
        declarations.len()
    );

    Ok(ModuleScan {
        name,
        path: module_dir.to_path_buf(),
        file_count,
        declarations,
    })
}

/// Keep the first occurrence of each (kind, name), preserving order.
pub fn dedupe_declarations(declarations: Vec<Declaration>) -> Vec<Declaration> {
    let mut seen = HashSet::new();
    declarations
        .into_iter()
        .filter(|d| seen.insert((d.kind, d.name.clone())))
        .collect()
}

/// Sort by kind keyword, then name, using plain string ordering.
pub fn sort_declarations(declarations: &mut [Declaration]) {
    declarations.sort_by(|a, b| {
        a.kind
            .as_str()
            .cmp(b.kind.as_str())
            .then_with(|| a.name.cmp(&b.name))
    });
}
