use std::fs;
use std::path::Path;

use crate::Result;

/// Read a whole file into a string.
pub fn read_file_content(path: impl AsRef<Path>) -> Result<String> {
    let bytes = fs::read(path.as_ref())?;
    let text = std::str::from_utf8(&bytes)?;
    Ok(text.to_owned())
}

/// Read a whole file into a string.
///
/// Returns an empty string if the file is missing, unreadable or not UTF-8.
pub fn load_file_content(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    match read_file_content(path) {
        Ok(content) => {
            log::debug!("loaded {} bytes from {}", content.len(), path.display());
            content
        }
        Err(e) => {
            log::warn!("failed to load {}: {e}", path.display());
            String::new()
        }
    }
}
