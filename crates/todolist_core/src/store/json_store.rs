//! JSON file storage for todo documents.
//!
//! # Responsibility
//! - Serialize the full item sequence to one human-readable JSON file.
//! - Read such files back, tolerating minified and hand-edited input.
//!
//! # Invariants
//! - `save` writes the whole document or fails; it never mutates items.
//! - `load` accepts case-variant field names via the item decoder.
//! - Missing file, unreadable file and unparsable content are distinct
//!   error conditions.

use crate::model::item::TodoItem;
use crate::store::{StoreError, StoreResult};
use log::{info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Storage contract for whole-document persistence of a todo list.
pub trait TodoStore {
    /// Reads and decodes the full document.
    fn load(&self) -> StoreResult<Vec<TodoItem>>;
    /// Encodes and writes the full item sequence, replacing prior content.
    fn save(&self, items: &[TodoItem]) -> StoreResult<()>;
}

/// File-backed store producing pretty-printed JSON.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target file path of this store.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TodoStore for JsonFileStore {
    fn load(&self) -> StoreResult<Vec<TodoItem>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(self.path.clone()));
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let items: Vec<TodoItem> = serde_json::from_str(&text).map_err(|source| {
            warn!(
                "event=list_load module=store status=error path={} error={source}",
                self.path.display()
            );
            StoreError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;

        info!(
            "event=list_load module=store status=ok path={} items={}",
            self.path.display(),
            items.len()
        );
        Ok(items)
    }

    fn save(&self, items: &[TodoItem]) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(items).map_err(|source| StoreError::Encode {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!(
            "event=list_save module=store status=ok path={} items={}",
            self.path.display(),
            items.len()
        );
        Ok(())
    }
}
