//! Error types for dictsync.
//!
//! All fallible operations return [`Result`], whose error side is
//! [`DictSyncError`]. The codec layer never swallows errors; it hands them to
//! the merge driver, which decides whether a failure aborts the run.
//!
//! # Examples
//!
//! ```
//! use dictsync::error::{DictSyncError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(DictSyncError::other("something went wrong"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for dictsync operations.
#[derive(Error, Debug)]
pub enum DictSyncError {
    /// No detection rule matched the file.
    #[error("Cannot determine format of file: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// A format name that does not map to any known dictionary format.
    #[error("Unknown dictionary format: {0}")]
    UnknownFormat(String),

    /// Reading or writing a dictionary file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Nothing usable was supplied or found.
    #[error("No input: {0}")]
    EmptyInput(String),

    /// JSON serialization errors (report output)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with DictSyncError.
pub type Result<T> = std::result::Result<T, DictSyncError>;

impl DictSyncError {
    /// Wrap an I/O error together with the path it happened on.
    pub fn io<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        DictSyncError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an unsupported-format error for a path.
    pub fn unsupported<P: AsRef<Path>>(path: P) -> Self {
        DictSyncError::UnsupportedFormat {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a new empty-input error.
    pub fn empty_input<S: Into<String>>(msg: S) -> Self {
        DictSyncError::EmptyInput(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        DictSyncError::Other(msg.into())
    }
}
