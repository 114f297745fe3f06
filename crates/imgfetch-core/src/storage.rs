//! Filesystem side of a run: ancestor directories and the destination file.

use crate::error::FetchError;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Creates every missing ancestor of `path`. Succeeds silently if they exist.
/// Returns false when `path` has no parent component (a bare file name).
pub fn ensure_parent_dir(path: &Path) -> Result<bool, FetchError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Ok(false),
    };
    fs::create_dir_all(parent).map_err(|source| FetchError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })?;
    Ok(true)
}

/// Writes `data` to `path`, truncating any existing file. Returns bytes written.
pub fn write_file(path: &Path, data: &[u8]) -> Result<u64, FetchError> {
    let write_err = |source| FetchError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut f = File::create(path).map_err(write_err)?;
    f.write_all(data).map_err(write_err)?;
    f.flush().map_err(write_err)?;
    Ok(data.len() as u64)
}
