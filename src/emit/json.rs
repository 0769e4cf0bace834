use serde::Serialize;

use crate::analyze::{ApiMap, ModuleScan};
use crate::generate::{relative_display, REPORT_NOTE, REPORT_TITLE};
use crate::types::{DeclKind, Declaration};

#[derive(Serialize)]
pub struct JsonOutput {
    pub title: String,
    pub root: String,
    pub sources: String,
    pub note: String,
    pub modules: Vec<ModuleOutput>,
}

#[derive(Serialize)]
pub struct ModuleOutput {
    pub name: String,
    pub files_scanned: usize,
    pub unique_declarations: usize,
    pub declarations: Vec<DeclarationOutput>,
    /// Declarations beyond the listing limit
    pub more: usize,
}

#[derive(Serialize)]
pub struct DeclarationOutput {
    pub kind: DeclKind,
    pub name: String,
    /// Root-relative path
    pub file: String,
    pub line: usize,
}

impl DeclarationOutput {
    fn from_declaration(decl: &Declaration, map: &ApiMap) -> Self {
        Self {
            kind: decl.kind,
            name: decl.name.clone(),
            file: relative_display(&decl.file, &map.root),
            line: decl.line,
        }
    }
}

impl ModuleOutput {
    pub fn from_module_scan(module: &ModuleScan, map: &ApiMap, limit: usize) -> Self {
        Self {
            name: module.name.clone(),
            files_scanned: module.file_count,
            unique_declarations: module.unique_count(),
            declarations: module
                .listed(limit)
                .iter()
                .map(|d| DeclarationOutput::from_declaration(d, map))
                .collect(),
            more: module.overflow(limit),
        }
    }
}

impl JsonOutput {
    pub fn from_api_map(map: &ApiMap, limit: usize) -> Self {
        Self {
            title: REPORT_TITLE.to_string(),
            root: map.root.display().to_string(),
            sources: map.sources_root.display().to_string(),
            note: REPORT_NOTE.to_string(),
            modules: map
                .modules
                .iter()
                .map(|m| ModuleOutput::from_module_scan(m, map, limit))
                .collect(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
