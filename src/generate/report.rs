use std::io::{self, Write};
use std::path::Path;

use crate::analyze::{ApiMap, ModuleScan};
use crate::types::Declaration;

pub const REPORT_TITLE: &str = "Hive Public API (Heuristic Map)";
pub const REPORT_NOTE: &str =
    "This is regex-based; it may miss symbols declared across multiple lines.";

/// Write the Markdown report for `map`, listing at most `limit` declarations per module.
pub fn write_report<W: Write>(out: &mut W, map: &ApiMap, limit: usize) -> io::Result<()> {
    writeln!(out, "# {}", REPORT_TITLE)?;
    writeln!(out)?;
    writeln!(out, "- Root: `{}`", map.root.display())?;
    writeln!(out, "- Sources: `{}`", map.sources_root.display())?;
    writeln!(out, "- Note: {}", REPORT_NOTE)?;
    writeln!(out)?;

    for module in &map.modules {
        write_module(out, module, &map.root, limit)?;
    }

    Ok(())
}

fn write_module<W: Write>(
    out: &mut W,
    module: &ModuleScan,
    root: &Path,
    limit: usize,
) -> io::Result<()> {
    writeln!(out, "## {}", module.name)?;
    writeln!(out)?;
    writeln!(out, "- Files scanned: {}", module.file_count)?;
    writeln!(out, "- Public decls (unique): {}", module.unique_count())?;
    writeln!(out)?;

    if module.declarations.is_empty() {
        return Ok(());
    }

    for decl in module.listed(limit) {
        writeln!(out, "- {}", format_entry(decl, root))?;
    }

    let overflow = module.overflow(limit);
    if overflow > 0 {
        writeln!(out, "- ... ({} more)", overflow)?;
    }
    writeln!(out)?;

    Ok(())
}

/// Render the Markdown report into a `String`.
pub fn generate_report(map: &ApiMap, limit: usize) -> io::Result<String> {
    let mut buf = Vec::new();
    write_report(&mut buf, map, limit)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn format_entry(decl: &Declaration, root: &Path) -> String {
    format!(
        "`{}` ({}:{})",
        decl.signature(),
        relative_display(&decl.file, root),
        decl.line
    )
}

/// `path` relative to `root` with `/` separators; unchanged if outside `root`.
pub fn relative_display(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DeclKind;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn module(name: &str, file_count: usize, declarations: Vec<Declaration>) -> ModuleScan {
        ModuleScan {
            name: name.to_string(),
            path: PathBuf::from(format!("/repo/libs/hive/Sources/{name}")),
            file_count,
            declarations,
        }
    }

    fn map(modules: Vec<ModuleScan>) -> ApiMap {
        ApiMap {
            root: PathBuf::from("/repo"),
            sources_root: PathBuf::from("/repo/libs/hive/Sources"),
            modules,
        }
    }

    #[test]
    fn test_full_report_layout() {
        let report = generate_report(
            &map(vec![
                module(
                    "ModA",
                    1,
                    vec![Declaration::new(
                        DeclKind::Struct,
                        "Widget",
                        "/repo/libs/hive/Sources/ModA/A.swift",
                        3,
                    )],
                ),
                module("Empty", 2, vec![]),
            ]),
            60,
        )
        .unwrap();

        let expected = "\
# Hive Public API (Heuristic Map)

- Root: `/repo`
- Sources: `/repo/libs/hive/Sources`
- Note: This is regex-based; it may miss symbols declared across multiple lines.

## ModA

- Files scanned: 1
- Public decls (unique): 1

- `struct Widget` (libs/hive/Sources/ModA/A.swift:3)

## Empty

- Files scanned: 2
- Public decls (unique): 0

";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_truncates_after_limit() {
        let decls: Vec<Declaration> = (0..61)
            .map(|i| {
                Declaration::new(
                    DeclKind::Let,
                    format!("value{i:02}"),
                    "/repo/libs/hive/Sources/ModA/A.swift",
                    i + 1,
                )
            })
            .collect();

        let report = generate_report(&map(vec![module("ModA", 1, decls)]), 60).unwrap();

        let entries = report.lines().filter(|l| l.starts_with("- `let ")).count();
        assert_eq!(entries, 60);
        assert!(report.contains("- `let value59` (libs/hive/Sources/ModA/A.swift:60)"));
        assert!(!report.contains("value60"));
        assert!(report.ends_with("- ... (1 more)\n\n"));
    }

    #[test]
    fn test_relative_display() {
        assert_eq!(
            relative_display(Path::new("/repo/a/b/C.swift"), Path::new("/repo")),
            "a/b/C.swift"
        );
        assert_eq!(
            relative_display(Path::new("/elsewhere/C.swift"), Path::new("/repo")),
            "/elsewhere/C.swift"
        );
    }
}
