// src/output/paths.rs
//! Pure functions for path calculations.

use std::path::{Path, PathBuf};

/// Sibling path used while a file is being written: `dir/.name.part`.
///
/// Living in the same directory keeps the final rename atomic on every
/// mainstream filesystem.
pub fn staging_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "export".to_string());
    target.with_file_name(format!(".{}.part", name))
}

/// Resolves the directory an export lands in: the given one, or the current
/// directory.
pub fn resolve_output_dir(dir: Option<&Path>) -> PathBuf {
    match dir {
        Some(d) if !d.as_os_str().is_empty() => d.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
