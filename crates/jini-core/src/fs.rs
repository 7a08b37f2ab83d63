//! Filesystem helpers for loading and saving documents.
//!
//! Every handle is opened and dropped within one call. Write paths sync
//! the handle before it is released and report that failure as
//! [`IniError::Close`], separate from the write itself.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use log::trace;

use crate::error::{IniError, Result};

/// Read the whole file at `path`.
///
/// A missing file is created empty when `create` is set, otherwise it is
/// reported as [`IniError::NotFound`].
pub(crate) fn read_source(path: &Path, create: bool) -> Result<Vec<u8>> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            if !create {
                return Err(IniError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            trace!("Creating empty INI file {}", path.display());
            File::create(path).map_err(|source| IniError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(IniError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut data = Vec::new();
    file.read_to_end(&mut data)
        .map_err(|source| IniError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(data)
}

/// Truncate or create `path` and write `data` in one call.
pub(crate) fn write_truncate(path: &Path, data: &[u8]) -> Result<()> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|source| IniError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    write_and_sync(file, path, data)
}

/// Write `data` to a sibling temp file, then rename it over `path`.
pub(crate) fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let temp_path = temp_path_for(path)?;

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .map_err(|source| IniError::Write {
            path: temp_path.clone(),
            source,
        })?;
    if let Err(err) = write_and_sync(file, &temp_path, data) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    rename_with_fallback(&temp_path, path).map_err(|source| IniError::Rename {
        path: path.to_path_buf(),
        source,
    })
}

fn write_and_sync(mut file: File, path: &Path, data: &[u8]) -> Result<()> {
    file.write_all(data).map_err(|source| IniError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    file.sync_all().map_err(|source| IniError::Close {
        path: path.to_path_buf(),
        source,
    })
}

fn temp_path_for(path: &Path) -> Result<std::path::PathBuf> {
    let invalid = |reason: &str| IniError::Write {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidInput, reason.to_string()),
    };

    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| invalid("Invalid INI filename"))?;
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| invalid("System time is before the epoch"))?
        .as_nanos();

    Ok(parent.join(format!("{}.{}.tmp", filename, nanos)))
}

/// Rename `temp_path` to `destination`, replacing it.
///
/// Where `fs::rename` refuses to overwrite an existing destination, the
/// destination is removed and the rename retried. The temp file is removed
/// if the retry fails too.
///
/// # Errors
///
/// Returns the retry error, annotated with the initial one, if the rename
/// fails even after the destination was removed.
pub(crate) fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}
