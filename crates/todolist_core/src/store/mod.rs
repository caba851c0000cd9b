//! Persistence boundary for todo documents.
//!
//! # Responsibility
//! - Define the storage contract consumed by the list.
//! - Keep file-format and I/O details inside this module.
//!
//! # Invariants
//! - Storage failures are reported as typed [`StoreError`] values, never
//!   masked or retried.
//! - A failed load returns no partial item set.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

mod json_store;

pub use json_store::{JsonFileStore, TodoStore};

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage error for whole-document save and load operations.
#[derive(Debug)]
pub enum StoreError {
    /// No file exists at the targeted path. Callers decide whether this is
    /// a first run or a real error.
    NotFound(PathBuf),
    /// File content could not be parsed as a todo document.
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Reading or writing the file failed below the format layer.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Items could not be encoded into document form.
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "todo file not found: {}", path.display()),
            Self::Malformed { path, source } => {
                write!(f, "malformed todo document `{}`: {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "i/o failure on todo file `{}`: {source}", path.display())
            }
            Self::Encode { path, source } => write!(
                f,
                "cannot encode todo items for `{}`: {source}",
                path.display()
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Malformed { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::Encode { source, .. } => Some(source),
        }
    }
}
