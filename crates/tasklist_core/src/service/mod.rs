//! Core use-case services.
//!
//! # Responsibility
//! - Hold application-shell state and orchestrate store/view calls.
//! - Keep presentation layers decoupled from snapshot bookkeeping.

pub mod task_session;
