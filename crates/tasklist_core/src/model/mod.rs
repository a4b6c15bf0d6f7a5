//! Domain model for the task list.
//!
//! # Responsibility
//! - Define canonical data structures used by store and view logic.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Deletion is a soft-delete flag; only purge discards tasks.

pub mod filter;
pub mod task;
