mod filter;
mod walker;

pub use filter::{has_source_extension, is_excluded_path};
pub use walker::{count_files, discover_files, list_modules};
