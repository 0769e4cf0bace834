mod api_map;
pub mod lang;
pub mod module;
mod source;

pub use api_map::{build_api_map, ApiMap};
pub use lang::{match_declaration, LanguageParser, SwiftParser};
pub use module::{dedupe_declarations, scan_module, sort_declarations, ModuleScan};
pub use source::read_source;
