//! Collection mutation layer.
//!
//! # Responsibility
//! - Allocate task identifiers.
//! - Turn one collection snapshot plus one user intent into the next snapshot.
//!
//! # Invariants
//! - Store functions hold no state; the allocator is the only stateful part.

pub mod id_allocator;
pub mod task_store;
