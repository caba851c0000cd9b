//! Todo list collection and use-case surface.
//!
//! # Responsibility
//! - Own the ordered item sequence and its lifecycle.
//! - Expose add/remove/find/count plus save/load over a [`TodoStore`].
//!
//! # Invariants
//! - Insertion order is preserved for iteration and views.
//! - Identifier uniqueness comes from the v4 generation scheme.
//! - `load` replaces contents all-or-nothing: any failure leaves the
//!   previous items untouched.

use crate::model::item::{ItemId, ItemValidationError, TodoItem};
use crate::store::{JsonFileStore, StoreResult, TodoStore};
use std::path::Path;

/// Ordered, owning collection of todo items.
#[derive(Debug, Default)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs an item from `title`, appends it and returns it.
    ///
    /// The returned borrow is mutable so callers can immediately adjust the
    /// fresh item (`mark_done`, `rename`) the way they would any item
    /// reached through [`TodoList::get_mut`].
    ///
    /// # Errors
    /// - [`ItemValidationError::EmptyTitle`] when the title is blank after
    ///   trimming; the list is left unchanged.
    pub fn add(&mut self, title: impl Into<String>) -> Result<&mut TodoItem, ItemValidationError> {
        let item = TodoItem::new(title)?;
        self.items.push(item);
        let last = self.items.len() - 1;
        Ok(&mut self.items[last])
    }

    /// Removes every item whose identifier equals `id`.
    ///
    /// Returns whether any removal occurred. An unknown id is not an
    /// error; the list is simply left unchanged and `false` is returned.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// Returns the item with the given identifier, if present.
    pub fn get(&self, id: ItemId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Mutable access to the item with the given identifier.
    ///
    /// Item invariants still hold through this path: `TodoItem` fields are
    /// private and all mutation goes through its validated methods.
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Lazily yields items whose title contains `substring`, ignoring case,
    /// in list order.
    ///
    /// An empty `substring` matches every item. The iterator borrows the
    /// list and does not mutate it; calling `find` again restarts the scan.
    pub fn find<'a>(&'a self, substring: &str) -> impl Iterator<Item = &'a TodoItem> + 'a {
        let needle = substring.to_lowercase();
        self.items
            .iter()
            .filter(move |item| item.title().to_lowercase().contains(&needle))
    }

    /// Current number of items.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Ordered read-only view of the current items.
    ///
    /// The borrow rules make the view consistent by construction: it cannot
    /// be held across a later mutation of the list.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Saves all items through the given store. The in-memory list is never
    /// mutated by a save, successful or not.
    pub fn save_to(&self, store: &impl TodoStore) -> StoreResult<()> {
        store.save(&self.items)
    }

    /// Replaces the list contents with the items decoded by the store.
    ///
    /// All-or-nothing: when the store fails, the current contents are left
    /// untouched.
    pub fn load_from(&mut self, store: &impl TodoStore) -> StoreResult<()> {
        self.items = store.load()?;
        Ok(())
    }

    /// Saves to a JSON file at `path`, overwriting any existing file.
    ///
    /// # Errors
    /// - [`StoreError::Encode`](crate::store::StoreError::Encode) when the
    ///   items cannot be encoded.
    /// - [`StoreError::Io`](crate::store::StoreError::Io) when the write
    ///   fails.
    pub fn save(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        self.save_to(&JsonFileStore::new(path.as_ref()))
    }

    /// Loads the JSON file at `path`, replacing the list contents.
    ///
    /// # Errors
    /// - [`StoreError::NotFound`](crate::store::StoreError::NotFound) when
    ///   no file exists at `path`.
    /// - [`StoreError::Malformed`](crate::store::StoreError::Malformed) when
    ///   the content does not parse; the list keeps its previous contents.
    /// - [`StoreError::Io`](crate::store::StoreError::Io) for any other
    ///   read failure.
    pub fn load(&mut self, path: impl AsRef<Path>) -> StoreResult<()> {
        self.load_from(&JsonFileStore::new(path.as_ref()))
    }
}
