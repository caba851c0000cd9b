//! Todo item domain model.
//!
//! # Responsibility
//! - Define the single todo record (identity, title, done flag).
//! - Provide the validated mutation helpers for title and done state.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `title` is trimmed and non-empty after `new` and `rename`.
//! - `from_parts` assigns fields verbatim; it is the only path that skips
//!   title validation and must stay reserved for decode/import callers.

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a todo item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = Uuid;

/// Validation failure for caller-supplied item data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Title was empty or all whitespace after trimming.
    EmptyTitle,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => {
                write!(f, "title must contain at least one non-whitespace character")
            }
        }
    }
}

impl Error for ItemValidationError {}

/// A single todo record.
///
/// Fields are private so the title invariant cannot be broken from outside;
/// reads go through [`TodoItem::id`], [`TodoItem::title`] and
/// [`TodoItem::is_done`].
///
/// Wire shape is lower camel-case: `id`, `title`, `isDone`. Decoding matches
/// those field names case-insensitively, so hand-edited documents with
/// `ID`/`Title`/`isdone` spellings still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoItem {
    id: ItemId,
    title: String,
    #[serde(rename = "isDone")]
    done: bool,
}

impl TodoItem {
    /// Creates a new item with a generated stable ID and `done = false`.
    ///
    /// The title is stored trimmed. Construction applies the same rule as
    /// [`TodoItem::rename`]: a title that is empty after trimming is
    /// rejected with [`ItemValidationError::EmptyTitle`].
    pub fn new(title: impl Into<String>) -> Result<Self, ItemValidationError> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(ItemValidationError::EmptyTitle);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            title: trimmed.to_string(),
            done: false,
        })
    }

    /// Reconstructs an item from previously persisted parts.
    ///
    /// Used by decode/import paths where identity and state already exist
    /// externally. Fields are assigned verbatim: no trimming, no title
    /// validation. Keeping this bypass in one named constructor makes it
    /// auditable instead of reachable through the public validated API.
    pub fn from_parts(id: ItemId, title: impl Into<String>, done: bool) -> Self {
        Self {
            id,
            title: title.into(),
            done,
        }
    }

    /// Stable identifier, immutable for the item's lifetime.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Current title. Trimmed and non-empty on every validated path.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the item has been completed.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Marks the item completed. Idempotent.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Clears the completed flag. Idempotent.
    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Replaces the title with the trimmed input.
    ///
    /// # Errors
    /// - [`ItemValidationError::EmptyTitle`] when the input is empty or all
    ///   whitespace; the current title is left unchanged.
    pub fn rename(&mut self, new_title: impl Into<String>) -> Result<(), ItemValidationError> {
        let new_title = new_title.into();
        let trimmed = new_title.trim();
        if trimmed.is_empty() {
            return Err(ItemValidationError::EmptyTitle);
        }

        self.title = trimmed.to_string();
        Ok(())
    }
}

// Hand-written decoder instead of a derive: field names must match
// case-insensitively, and decoded records must flow through `from_parts`.
impl<'de> Deserialize<'de> for TodoItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ItemVisitor;

        impl<'de> Visitor<'de> for ItemVisitor {
            type Value = TodoItem;

            fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str("a todo item object with `id`, `title` and `isDone` fields")
            }

            fn visit_map<A>(self, mut map: A) -> Result<TodoItem, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut id: Option<ItemId> = None;
                let mut title: Option<String> = None;
                let mut done: Option<bool> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.to_ascii_lowercase().as_str() {
                        "id" => {
                            if id.is_some() {
                                return Err(de::Error::duplicate_field("id"));
                            }
                            id = Some(map.next_value()?);
                        }
                        "title" => {
                            if title.is_some() {
                                return Err(de::Error::duplicate_field("title"));
                            }
                            title = Some(map.next_value()?);
                        }
                        "isdone" => {
                            if done.is_some() {
                                return Err(de::Error::duplicate_field("isDone"));
                            }
                            done = Some(map.next_value()?);
                        }
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                let id = id.ok_or_else(|| de::Error::missing_field("id"))?;
                let title = title.ok_or_else(|| de::Error::missing_field("title"))?;
                let done = done.ok_or_else(|| de::Error::missing_field("isDone"))?;

                Ok(TodoItem::from_parts(id, title, done))
            }
        }

        deserializer.deserialize_map(ItemVisitor)
    }
}
