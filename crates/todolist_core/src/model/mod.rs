//! Domain model for todo records.
//!
//! # Responsibility
//! - Define the canonical item record owned by the list.
//! - Enforce the non-blank title invariant on every mutation path.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId`.
//! - Title validation happens in the model, never in callers.

pub mod item;
