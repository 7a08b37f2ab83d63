//! Error types for INI document operations.
//!
//! Parsing is total over arbitrary text, so every variant here comes from
//! the filesystem. Errors carry the path involved; callers own presentation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for INI operations.
pub type Result<T> = std::result::Result<T, IniError>;

/// Core error type for INI operations.
#[derive(Debug, Error)]
pub enum IniError {
    /// Source file is absent and creation was not requested
    #[error("INI file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Opening or reading the source failed
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Opening, truncating or writing the destination failed
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Flushing the handle before release failed
    #[error("Failed to close {}: {source}", path.display())]
    Close {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Replacing the destination with the temp file failed
    #[error("Failed to replace {}: {source}", path.display())]
    Rename {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl IniError {
    /// Returns true if this error means the source file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, IniError::NotFound { .. })
    }

    /// Path the failed operation was acting on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            IniError::NotFound { path }
            | IniError::Read { path, .. }
            | IniError::Write { path, .. }
            | IniError::Close { path, .. }
            | IniError::Rename { path, .. } => path,
        }
    }
}
