//! Core domain logic for the task list.
//! This crate is the single source of truth for task invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::filter::{FilterMode, FilterModeParseError};
pub use model::task::{Task, TaskCollection, TaskId, TaskPatch, TaskValidationError};
pub use service::task_session::TaskSession;
pub use store::id_allocator::{ClockIdAllocator, IdAllocator, SequentialIdAllocator};
pub use view::view_filter::{FilterCounts, TaskView};

/// Minimal health-check API for shell integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
