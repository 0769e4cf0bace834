use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Declaration categories recognised after the `public` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    Struct,
    Enum,
    Protocol,
    Class,
    Actor,
    Typealias,
    Func,
    Var,
    Let,
}

impl DeclKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclKind::Struct => "struct",
            DeclKind::Enum => "enum",
            DeclKind::Protocol => "protocol",
            DeclKind::Class => "class",
            DeclKind::Actor => "actor",
            DeclKind::Typealias => "typealias",
            DeclKind::Func => "func",
            DeclKind::Var => "var",
            DeclKind::Let => "let",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "struct" => Some(DeclKind::Struct),
            "enum" => Some(DeclKind::Enum),
            "protocol" => Some(DeclKind::Protocol),
            "class" => Some(DeclKind::Class),
            "actor" => Some(DeclKind::Actor),
            "typealias" => Some(DeclKind::Typealias),
            "func" => Some(DeclKind::Func),
            "var" => Some(DeclKind::Var),
            "let" => Some(DeclKind::Let),
            _ => None,
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single public declaration found on one line of a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclKind,
    pub name: String,
    /// Path of the file the declaration was found in
    pub file: PathBuf,
    /// 1-based line number
    pub line: usize,
}

impl Declaration {
    pub fn new(kind: DeclKind, name: impl Into<String>, file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            kind,
            name: name.into(),
            file: file.into(),
            line,
        }
    }

    /// Identity used for de-duplication; file and line are not part of it.
    pub fn key(&self) -> (DeclKind, &str) {
        (self.kind, self.name.as_str())
    }

    /// "struct Widget"
    pub fn signature(&self) -> String {
        format!("{} {}", self.kind, self.name)
    }
}
