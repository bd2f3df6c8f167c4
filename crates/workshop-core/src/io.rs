//! Filesystem primitives with path context on every failure
//!
//! All mutating operations here are fatal on error: a partial write or a
//! half-copied tree must surface immediately rather than be retried.

use std::fs::{self, OpenOptions};
use std::io::Write;

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Read a file's raw bytes.
pub fn read_bytes(path: &NormalizedPath) -> Result<Vec<u8>> {
    let native = path.to_native();
    fs::read(&native).map_err(|e| Error::io(&native, e))
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native = path.to_native();
    fs::read_to_string(&native).map_err(|e| Error::io(&native, e))
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so a crash mid-write never leaves a
/// truncated manifest behind. Acquires an advisory lock on the temp file.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native = path.to_native();

    let temp_name = format!(
        ".{}.{}.tmp",
        native
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: native.clone(),
        })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: native.clone(),
    })?;

    fs::rename(&temp_path, &native).map_err(|e| Error::io(&native, e))
}

/// List the child directories of `path`, sorted by name.
///
/// A missing `path` is a valid, empty listing; non-directory entries are
/// skipped.
pub fn list_subdirectories(path: &NormalizedPath) -> Result<Vec<NormalizedPath>> {
    let native = path.to_native();
    if !native.is_dir() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    let entries = fs::read_dir(&native).map_err(|e| Error::io(&native, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&native, e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        if file_type.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();

    Ok(names.iter().map(|name| path.join(name)).collect())
}

/// Remove a directory tree entirely, contents included.
pub fn remove_dir_recursive(path: &NormalizedPath) -> Result<()> {
    let native = path.to_native();
    fs::remove_dir_all(&native).map_err(|e| Error::io(&native, e))
}

/// Recursively copy the tree at `src` to `dst`, preserving names, contents,
/// and nested structure. `dst` and any intermediate directories are created.
pub fn copy_dir_recursive(src: &NormalizedPath, dst: &NormalizedPath) -> Result<()> {
    let src_native = src.to_native();
    let dst_native = dst.to_native();
    fs::create_dir_all(&dst_native).map_err(|e| Error::io(&dst_native, e))?;

    let entries = fs::read_dir(&src_native).map_err(|e| Error::io(&src_native, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&src_native, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let child_src = src.join(&name);
        let child_dst = dst.join(&name);
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        if file_type.is_dir() {
            copy_dir_recursive(&child_src, &child_dst)?;
        } else {
            fs::copy(child_src.to_native(), child_dst.to_native())
                .map_err(|e| Error::io(child_src.to_native(), e))?;
        }
    }

    Ok(())
}
