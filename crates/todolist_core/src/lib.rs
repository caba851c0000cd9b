//! Core domain logic for the todolist manager.
//! This crate is the single source of truth for business invariants.

pub mod list;
pub mod logging;
pub mod model;
pub mod store;

pub use list::todo_list::TodoList;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{ItemId, ItemValidationError, TodoItem};
pub use store::{JsonFileStore, StoreError, StoreResult, TodoStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
