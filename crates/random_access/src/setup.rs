// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fs;
use std::io::Result;
use std::path::Path;

use tracing::{Level, event};

/// Creates `path` as a directory unless one is already there.
///
/// Existing directories are left untouched, so repeated runs are no-ops.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, including when
/// `path` already exists but is not a directory.
pub fn ensure_directory(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir(path)?;
    event!(Level::DEBUG, message = "directory created", path = ?path);
    Ok(())
}

/// Creates `path` as a regular file holding `contents` unless one is
/// already there.
///
/// The guard is existence-only: a file that is already present keeps
/// whatever bytes it has, even if they no longer match `contents`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written, including
/// when `path` exists but is not a regular file.
pub fn ensure_file(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    if path.is_file() {
        return Ok(());
    }
    fs::write(path, contents)?;
    event!(Level::DEBUG, message = "file created", path = ?path, bytes = contents.len());
    Ok(())
}
