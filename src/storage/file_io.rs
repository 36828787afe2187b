//! File I/O utilities for the data file
//!
//! Reads are whole-file. Writes either overwrite in place or go through a
//! temp file that is renamed over the target.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::ExpenseError;

/// Read a file to a string, returning `None` if it doesn't exist
pub fn read_optional<P: AsRef<Path>>(path: P) -> Result<Option<String>, ExpenseError> {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ExpenseError::storage_read(path, e)),
    }
}

/// Overwrite a file with `bytes`
///
/// A failure part-way leaves whatever was written so far on disk.
pub fn write_in_place<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), ExpenseError> {
    let path = path.as_ref();
    ensure_parent(path)?;

    fs::write(path, bytes).map_err(|e| ExpenseError::storage_write(path, e))
}

/// Write a file atomically (write to temp, then rename)
///
/// The target is either completely replaced or left untouched.
pub fn write_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), ExpenseError> {
    let path = path.as_ref();
    ensure_parent(path)?;

    // Same directory as the target so the rename stays on one file system
    let temp_path = temp_path_for(path);

    let mut file = File::create(&temp_path).map_err(|e| {
        ExpenseError::storage_write(path, format!("failed to create temp file: {}", e))
    })?;

    file.write_all(bytes)
        .and_then(|_| file.flush())
        .and_then(|_| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            ExpenseError::storage_write(path, e)
        })?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ExpenseError::storage_write(path, format!("failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), ExpenseError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::storage_write(
                    path,
                    format!("failed to create directory {}: {}", parent.display(), e),
                )
            })?;
        }
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
