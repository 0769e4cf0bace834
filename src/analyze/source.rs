use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, ScanError};

/// Read a source file as text.
///
/// Invalid UTF-8 is decoded with replacement characters instead of failing;
/// I/O errors are returned as-is.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| ScanError::io(path, e))?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            debug!("Lossy decode for {}: {}", path.display(), err.utf8_error());
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}
