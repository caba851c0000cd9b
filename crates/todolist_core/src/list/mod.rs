//! Owning collection of todo items.
//!
//! # Responsibility
//! - Provide the CRUD and query surface over the ordered item sequence.
//! - Orchestrate whole-document persistence through the store contract.
//!
//! # Invariants
//! - The list is the only owner of its items; outside reads are borrows.
//! - Every operation is a complete synchronous transition; there is no
//!   partially-applied list state.

pub mod todo_list;
