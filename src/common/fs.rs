//! Common file system operations with unified error handling

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, fs};

/// Read a text file, mapping failures to file errors
pub fn read_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(fs::not_found(path.display().to_string()));
    }
    std::fs::read_to_string(path)
        .map_err(|e| fs::read_failed(path.display().to_string(), e.to_string()))
}

/// Write a file atomically
///
/// The content goes to a temporary file next to `path` which then replaces it,
/// so readers never observe a half-written page.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let write_failed =
        |e: &dyn std::fmt::Display| fs::write_failed(path.display().to_string(), e.to_string());

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|e| write_failed(&e))?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| write_failed(&e))?;
    temp.write_all(content.as_bytes())
        .map_err(|e| write_failed(&e))?;
    temp.persist(path).map_err(|e| write_failed(&e.error))?;
    Ok(())
}
