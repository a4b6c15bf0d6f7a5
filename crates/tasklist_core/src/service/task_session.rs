//! Application-shell session state.
//!
//! # Responsibility
//! - Own the current collection snapshot, filter mode and ID allocator.
//! - Route every user intent through the store functions.
//!
//! # Invariants
//! - State changes only through `&mut self` methods of this type.
//! - Snapshots handed out earlier are never affected by later mutations.

use crate::model::filter::FilterMode;
use crate::model::task::{Task, TaskCollection, TaskId, TaskPatch};
use crate::store::id_allocator::{IdAllocator, SequentialIdAllocator};
use crate::store::task_store;
use crate::view::view_filter::{self, FilterCounts, TaskView};
use log::debug;

/// Single source of truth for one task list.
pub struct TaskSession<A: IdAllocator = SequentialIdAllocator> {
    tasks: TaskCollection,
    filter: FilterMode,
    allocator: A,
}

impl TaskSession {
    /// Creates an empty session with counter-based IDs.
    pub fn new() -> Self {
        Self::with_allocator(SequentialIdAllocator::new())
    }
}

impl Default for TaskSession {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: IdAllocator> TaskSession<A> {
    /// Creates an empty session using the provided allocator.
    pub fn with_allocator(allocator: A) -> Self {
        Self {
            tasks: TaskCollection::new(),
            filter: FilterMode::default(),
            allocator,
        }
    }

    /// Sets the initial filter mode.
    pub fn with_filter(mut self, filter: FilterMode) -> Self {
        self.filter = filter;
        self
    }

    /// Current collection snapshot. Cloning it is cheap.
    pub fn tasks(&self) -> &TaskCollection {
        &self.tasks
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    /// Adds a task and returns its ID, or `None` when `text` was rejected.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let next = task_store::add(&self.tasks, &mut self.allocator, text);
        let created = if next.len() > self.tasks.len() {
            next.first().map(Task::id)
        } else {
            None
        };
        self.tasks = next;
        created
    }

    /// Applies a field patch to one task; stale IDs are ignored.
    pub fn apply_patch(&mut self, id: TaskId, patch: TaskPatch) {
        self.tasks = task_store::set_field(&self.tasks, id, patch);
    }

    pub fn rename(&mut self, id: TaskId, text: impl Into<String>) {
        self.tasks = task_store::rename_task(&self.tasks, id, text);
    }

    pub fn set_checked(&mut self, id: TaskId, checked: bool) {
        self.tasks = task_store::set_checked(&self.tasks, id, checked);
    }

    pub fn soft_delete(&mut self, id: TaskId) {
        self.tasks = task_store::soft_delete(&self.tasks, id);
    }

    pub fn restore(&mut self, id: TaskId) {
        self.tasks = task_store::restore(&self.tasks, id);
    }

    /// Empties the trash.
    pub fn purge(&mut self) {
        self.tasks = task_store::purge(&self.tasks);
    }

    /// Switches the visible subset. Any mode is reachable from any mode.
    pub fn select_filter(&mut self, filter: FilterMode) {
        if self.filter != filter {
            debug!(
                "event=filter_select module=session status=ok from={} to={}",
                self.filter, filter
            );
        }
        self.filter = filter;
    }

    /// Tasks visible under the current filter.
    pub fn visible(&self) -> Vec<&Task> {
        view_filter::visible(&self.tasks, self.filter)
    }

    /// Render-ready view for the current state.
    pub fn view(&self) -> TaskView<'_> {
        view_filter::derive_view(&self.tasks, self.filter)
    }

    pub fn counts(&self) -> FilterCounts {
        view_filter::count_by_mode(&self.tasks)
    }

    pub fn has_removed_items(&self) -> bool {
        view_filter::has_removed_items(&self.tasks)
    }

    pub fn is_entry_form_enabled(&self) -> bool {
        view_filter::is_entry_form_enabled(self.filter)
    }
}
