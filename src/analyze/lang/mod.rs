mod swift;

pub use swift::{match_declaration, SwiftParser};

use crate::types::Declaration;
use std::path::Path;

pub trait LanguageParser {
    /// Declarations in `content`, in ascending line order.
    fn parse_declarations(&self, file: &Path, content: &str) -> Vec<Declaration>;
}
