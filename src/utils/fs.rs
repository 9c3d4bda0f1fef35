//! File system helpers for the mapping file.
//!
//! The mapping file is always read in full and, when it changes, rewritten in
//! full. [`atomic_write`] makes the rewrite crash-safe: readers see either the
//! old content or the new content, never a truncated file.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Reads a whole file into a string.
pub fn read_text_file(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// The content goes to a temporary file in the same directory as the target,
/// which is synced to disk and then renamed over it. Keeping the temporary
/// file in the same directory keeps the rename on one file system.
///
/// When `path` already exists it is resolved through any symlinks first, so
/// the link stays in place and its target receives the new content. The
/// existing file's permissions are carried over to the replacement.
///
/// On failure the temporary file is removed and the target is left untouched.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let (target, permissions) = match fs::canonicalize(path) {
        Ok(resolved) => {
            let permissions = fs::metadata(&resolved)?.permissions();
            (resolved, Some(permissions))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => (path.to_path_buf(), None),
        Err(e) => return Err(e),
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".comet-")
        .suffix(".tmp")
        .tempfile_in(dir)?;

    temp.write_all(content)?;
    if let Some(permissions) = permissions {
        temp.as_file().set_permissions(permissions)?;
    }
    temp.as_file().sync_all()?;

    temp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}
