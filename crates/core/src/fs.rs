//! Filesystem utilities

use std::path::Path;

use log::warn;

/// Check if a path is an existing regular file
///
/// Logs a warning when the path exists but is something else (e.g. a directory).
pub fn is_file(path: &str) -> bool {
    let p = Path::new(path);
    if p.is_file() {
        return true;
    }
    if p.exists() {
        warn!("Expected a file but found something else: {}", p.display());
    }
    false
}
