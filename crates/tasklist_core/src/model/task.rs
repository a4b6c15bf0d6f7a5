//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its identifier.
//! - Provide the immutable, newest-first collection snapshot type.
//! - Describe single-field edits as a closed patch value.
//!
//! # Invariants
//! - `id` is assigned once at creation and has no public setter.
//! - New tasks start with `checked = false` and `removed = false`.
//! - `checked` and `removed` are independent flags.
//! - A `TaskCollection` is never mutated after construction.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Stable identifier for one task.
///
/// Issued by an [`IdAllocator`](crate::store::id_allocator::IdAllocator);
/// values are unique for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw identifier value.
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation error raised while constructing a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Text is empty or whitespace-only.
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text must not be empty or whitespace-only"),
        }
    }
}

impl Error for TaskValidationError {}

/// One user-visible to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    /// Free text shown to the user.
    pub text: String,
    /// Completion flag.
    pub checked: bool,
    /// Soft-delete flag. Removed tasks stay restorable until purge.
    pub removed: bool,
}

impl Task {
    /// Creates a fresh task with both flags cleared.
    ///
    /// # Errors
    /// - Returns `TaskValidationError::EmptyText` when `text` has no
    ///   non-whitespace characters.
    pub fn new(id: TaskId, text: impl Into<String>) -> Result<Self, TaskValidationError> {
        let text = text.into();
        Self::validate_text(&text)?;
        Ok(Self::fresh(id, text))
    }

    /// Checks the creation rule for task text.
    ///
    /// # Errors
    /// - Returns `TaskValidationError::EmptyText` for empty or
    ///   whitespace-only text.
    pub fn validate_text(text: &str) -> Result<(), TaskValidationError> {
        if text.trim().is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(())
    }

    /// Builds a task from text already accepted by [`Task::validate_text`].
    pub(crate) fn fresh(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            checked: false,
            removed: false,
        }
    }

    /// Returns the immutable identifier.
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Returns whether this task is outside the trash.
    pub fn is_active(&self) -> bool {
        !self.removed
    }

    /// Returns a copy of this task with `patch` applied.
    ///
    /// Text patches are not validated: an edit may clear the text, only
    /// creation rejects empty input.
    pub fn patched(&self, patch: &TaskPatch) -> Self {
        let mut next = self.clone();
        match patch {
            TaskPatch::Text(text) => next.text = text.clone(),
            TaskPatch::Checked(value) => next.checked = *value,
            TaskPatch::Removed(value) => next.removed = *value,
        }
        next
    }
}

/// Single-field edit applied to an existing task.
///
/// `id` is deliberately absent: identity is not editable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskPatch {
    /// Replace the text.
    Text(String),
    /// Set the completion flag.
    Checked(bool),
    /// Set the soft-delete flag.
    Removed(bool),
}

impl TaskPatch {
    /// Stable field name used in diagnostics.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Checked(_) => "checked",
            Self::Removed(_) => "removed",
        }
    }
}

/// Ordered, newest-first snapshot of all tasks.
///
/// Cloning is cheap and shares storage; every store operation returns a new
/// value instead of editing an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskCollection {
    tasks: Arc<[Task]>,
}

impl TaskCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Newest task, if any.
    pub fn first(&self) -> Option<&Task> {
        self.tasks.first()
    }

    /// Looks up one task by ID.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// IDs in collection order.
    pub fn ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(Task::id).collect()
    }

    /// Returns whether both values share the same backing storage.
    ///
    /// Used to tell a no-op result from a rebuilt collection without
    /// comparing contents.
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tasks, &other.tasks)
    }
}

impl Default for TaskCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Task>> for TaskCollection {
    fn from(tasks: Vec<Task>) -> Self {
        Self {
            tasks: tasks.into(),
        }
    }
}

impl FromIterator<Task> for TaskCollection {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TaskCollection {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
