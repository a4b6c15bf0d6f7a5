//! Filtered projections and derived UI predicates.
//!
//! # Responsibility
//! - Map `(collection, mode)` to the ordered visible subset.
//! - Derive the enablement flags the presentation layer renders.
//!
//! # Invariants
//! - Every function here is pure and order-preserving.
//! - Removed tasks appear only under `FilterMode::Removed`.
//! - `All`, `Checked` and `Unchecked` partition the non-removed tasks.

use crate::model::filter::FilterMode;
use crate::model::task::{Task, TaskCollection};
use log::warn;
use serde::Serialize;

/// Returns whether `task` belongs to the view selected by `mode`.
pub fn is_visible_in(task: &Task, mode: FilterMode) -> bool {
    match mode {
        FilterMode::All => !task.removed,
        FilterMode::Checked => task.checked && !task.removed,
        FilterMode::Unchecked => !task.checked && !task.removed,
        FilterMode::Removed => task.removed,
    }
}

/// Tasks visible under `mode`, in collection order.
pub fn visible(collection: &TaskCollection, mode: FilterMode) -> Vec<&Task> {
    collection
        .iter()
        .filter(|task| is_visible_in(task, mode))
        .collect()
}

/// Like [`visible`], but takes a raw mode token.
///
/// An unrecognized token shows the full, unfiltered collection.
pub fn visible_by_name<'a>(collection: &'a TaskCollection, token: &str) -> Vec<&'a Task> {
    match token.parse::<FilterMode>() {
        Ok(mode) => visible(collection, mode),
        Err(err) => {
            warn!("event=view_filter module=view status=fallback reason=\"{err}\"");
            collection.iter().collect()
        }
    }
}

/// Whether at least one task sits in the trash (purge is enabled).
pub fn has_removed_items(collection: &TaskCollection) -> bool {
    collection.iter().any(|task| task.removed)
}

/// Whether the new-task entry form is usable under `mode`.
///
/// Disabled while viewing completed tasks and while viewing the trash, where
/// the purge control takes its place.
pub fn is_entry_form_enabled(mode: FilterMode) -> bool {
    !matches!(mode, FilterMode::Checked | FilterMode::Removed)
}

/// Everything the presentation layer needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView<'a> {
    pub mode: FilterMode,
    pub items: Vec<&'a Task>,
    pub entry_enabled: bool,
    pub purge_enabled: bool,
}

/// Builds the render-ready view for `(collection, mode)`.
pub fn derive_view(collection: &TaskCollection, mode: FilterMode) -> TaskView<'_> {
    TaskView {
        mode,
        items: visible(collection, mode),
        entry_enabled: is_entry_form_enabled(mode),
        purge_enabled: has_removed_items(collection),
    }
}

/// Per-mode task counts, e.g. for sidebar badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterCounts {
    pub all: usize,
    pub checked: usize,
    pub unchecked: usize,
    pub removed: usize,
}

impl FilterCounts {
    /// Count for one mode.
    pub fn get(&self, mode: FilterMode) -> usize {
        match mode {
            FilterMode::All => self.all,
            FilterMode::Checked => self.checked,
            FilterMode::Unchecked => self.unchecked,
            FilterMode::Removed => self.removed,
        }
    }
}

/// Counts tasks per mode in one pass.
pub fn count_by_mode(collection: &TaskCollection) -> FilterCounts {
    collection
        .iter()
        .fold(FilterCounts::default(), |mut counts, task| {
            if task.removed {
                counts.removed += 1;
            } else {
                counts.all += 1;
                if task.checked {
                    counts.checked += 1;
                } else {
                    counts.unchecked += 1;
                }
            }
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::{count_by_mode, is_entry_form_enabled, is_visible_in, visible};
    use crate::model::filter::FilterMode;
    use crate::model::task::{Task, TaskCollection, TaskId, TaskPatch};

    fn task(id: u64, checked: bool, removed: bool) -> Task {
        Task::new(TaskId::from_raw(id), format!("task-{id}"))
            .unwrap()
            .patched(&TaskPatch::Checked(checked))
            .patched(&TaskPatch::Removed(removed))
    }

    #[test]
    fn removed_and_checked_task_only_matches_removed() {
        let both = task(1, true, true);
        for mode in FilterMode::ALL_MODES {
            assert_eq!(is_visible_in(&both, mode), mode == FilterMode::Removed, "{mode}");
        }
    }

    #[test]
    fn entry_form_is_disabled_only_for_checked_and_removed() {
        assert!(is_entry_form_enabled(FilterMode::All));
        assert!(is_entry_form_enabled(FilterMode::Unchecked));
        assert!(!is_entry_form_enabled(FilterMode::Checked));
        assert!(!is_entry_form_enabled(FilterMode::Removed));
    }

    #[test]
    fn counts_agree_with_visible() {
        let tasks: TaskCollection = vec![
            task(4, false, false),
            task(3, true, false),
            task(2, false, true),
            task(1, true, true),
        ]
        .into();
        let counts = count_by_mode(&tasks);
        for mode in FilterMode::ALL_MODES {
            assert_eq!(counts.get(mode), visible(&tasks, mode).len(), "{mode}");
        }
    }
}
