//! Error types for usage-log.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for usage-log.
///
/// None of these escape [`UsageRecorder::track`](crate::UsageRecorder::track);
/// the recorder logs and swallows every failure. They are public because the
/// [`UsageStorage`](crate::UsageStorage) backends return them.
#[derive(Debug, Error)]
pub enum Error {
    // ── Initialization ───────────────────────────────────────────────────────
    /// The platform documents directory could not be determined.
    #[error("Cannot determine documents directory")]
    DocumentsDirUnavailable,

    /// Creating the log directory failed.
    #[error("Failed to create log directory {path}: {message}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Error description.
        message: String,
    },

    // ── Storage ──────────────────────────────────────────────────────────────
    /// Storage I/O error.
    #[error("Storage I/O error at {path}: {message}")]
    StorageIo {
        /// Path that caused the error.
        path: PathBuf,
        /// Error description.
        message: String,
    },

    /// Storage serialization error.
    #[error("Storage serialization error: {0}")]
    StorageSerialization(String),
}

impl Error {
    /// Creates a storage I/O error.
    #[must_use]
    pub fn storage_io(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::StorageIo {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a directory creation error.
    #[must_use]
    pub fn create_dir(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::CreateDir {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns true if this error occurred while setting up the log location,
    /// as opposed to reading or writing the log itself.
    #[must_use]
    pub fn is_initialization(&self) -> bool {
        matches!(self, Error::DocumentsDirUnavailable | Error::CreateDir { .. })
    }
}

/// Convenience type alias.
pub type Result<T> = std::result::Result<T, Error>;
