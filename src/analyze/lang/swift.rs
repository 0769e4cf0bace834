//! Heuristic extraction of `public` Swift declarations.
//!
//! Matching is line based: a declaration whose keyword and name are split
//! across lines is not detected.

use crate::analyze::lang::LanguageParser;
use crate::types::{DeclKind, Declaration};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

pub struct SwiftParser;

// public [final] struct|enum|protocol|class|actor|typealias|func|var|let Name
static PUBLIC_DECL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*public\s+(?:final\s+)?(struct|enum|protocol|class|actor|typealias|func|var|let)\s+([A-Za-z_]\w*)",
    )
    .unwrap()
});

/// Try to read a public declaration off a single line.
///
/// Only a match anchored at the start of the line counts; anything after
/// the identifier is ignored.
pub fn match_declaration(line: &str) -> Option<(DeclKind, &str)> {
    let cap = PUBLIC_DECL_PATTERN.captures(line)?;
    let kind = DeclKind::from_keyword(cap.get(1)?.as_str())?;
    let name = cap.get(2)?.as_str();
    Some((kind, name))
}

impl LanguageParser for SwiftParser {
    fn parse_declarations(&self, file: &Path, content: &str) -> Vec<Declaration> {
        split_lines(content)
            .into_iter()
            .enumerate()
            .filter_map(|(idx, line)| {
                match_declaration(line)
                    .map(|(kind, name)| Declaration::new(kind, name, file, idx + 1))
            })
            .collect()
    }
}

/// Split on every line terminator Python's `str.splitlines` honours,
/// treating `\r\n` as one break. A trailing terminator adds no empty line.
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = content.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&content[start..idx]);
        start = idx + c.len_utf8();
        if c == '\r' {
            if let Some(&(next, '\n')) = chars.peek() {
                chars.next();
                start = next + 1;
            }
        }
    }

    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
