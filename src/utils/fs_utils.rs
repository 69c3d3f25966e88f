//! File helpers shared by the engine and the CLI.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, warning};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `contents` to `path` all-or-nothing.
///
/// Data goes to a temporary file in the destination directory, which is then
/// renamed over `path`. The directory must already exist; on failure the
/// previous file (if any) is left untouched.
pub fn write_atomically(path: &Path, contents: &[u8]) -> AppResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| AppError::Io(e.error))?;
    Ok(())
}

/// Checks whether a file can be created or overwritten.
///
/// - file does not exist → Ok(true)
/// - file exists and `force` → Ok(true)
/// - file exists, no `force` → asks the user
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<bool> {
    if !path.exists() || force {
        return Ok(true);
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if confirm("Overwrite?")? {
        info("Existing file will be overwritten.");
        Ok(true)
    } else {
        Ok(false)
    }
}
