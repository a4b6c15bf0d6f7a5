//! Task collection mutations.
//!
//! # Responsibility
//! - Provide the only entry points that produce new collection snapshots.
//!
//! # Invariants
//! - Inputs are never modified; every function returns a collection value.
//! - Invalid input (empty text) and stale IDs are silent no-ops that return
//!   a clone sharing storage with the input.
//! - Relative order of surviving tasks never changes.
//! - Log lines carry IDs and field names only, never task text.

use crate::model::task::{Task, TaskCollection, TaskId, TaskPatch};
use crate::store::id_allocator::IdAllocator;
use log::{debug, warn};

/// Prepends a new task built from `text`.
///
/// Whitespace-only text leaves the collection unchanged and does not consume
/// an ID from `allocator`. An exhausted allocator also leaves it unchanged.
pub fn add<A: IdAllocator + ?Sized>(
    collection: &TaskCollection,
    allocator: &mut A,
    text: &str,
) -> TaskCollection {
    if let Err(err) = Task::validate_text(text) {
        debug!("event=task_add module=store status=skipped reason=\"{err}\"");
        return collection.clone();
    }

    let Some(id) = allocator.next_id() else {
        warn!("event=task_add module=store status=skipped reason=ids_exhausted");
        return collection.clone();
    };
    let task = Task::fresh(id, text);

    debug!(
        "event=task_add module=store status=ok id={} len={}",
        id,
        collection.len() + 1
    );
    std::iter::once(task)
        .chain(collection.iter().cloned())
        .collect()
}

/// Applies one field patch to the task with `id`.
///
/// A missing `id` is a no-op: the target may have been purged before the
/// triggering event arrived.
pub fn set_field(collection: &TaskCollection, id: TaskId, patch: TaskPatch) -> TaskCollection {
    if collection.get(id).is_none() {
        debug!(
            "event=task_set_field module=store status=skipped reason=stale_id id={} field={}",
            id,
            patch.field_name()
        );
        return collection.clone();
    }

    debug!(
        "event=task_set_field module=store status=ok id={} field={}",
        id,
        patch.field_name()
    );
    collection
        .iter()
        .map(|task| {
            if task.id() == id {
                task.patched(&patch)
            } else {
                task.clone()
            }
        })
        .collect()
}

/// Replaces the text of one task. Empty text is accepted here.
pub fn rename_task(
    collection: &TaskCollection,
    id: TaskId,
    text: impl Into<String>,
) -> TaskCollection {
    set_field(collection, id, TaskPatch::Text(text.into()))
}

/// Sets the completion flag of one task.
pub fn set_checked(collection: &TaskCollection, id: TaskId, checked: bool) -> TaskCollection {
    set_field(collection, id, TaskPatch::Checked(checked))
}

/// Sets the soft-delete flag of one task.
pub fn set_removed(collection: &TaskCollection, id: TaskId, removed: bool) -> TaskCollection {
    set_field(collection, id, TaskPatch::Removed(removed))
}

/// Moves one task to the trash.
pub fn soft_delete(collection: &TaskCollection, id: TaskId) -> TaskCollection {
    set_removed(collection, id, true)
}

/// Brings one task back from the trash.
pub fn restore(collection: &TaskCollection, id: TaskId) -> TaskCollection {
    set_removed(collection, id, false)
}

/// Permanently drops every soft-deleted task.
///
/// Idempotent. When nothing is removed, the result shares storage with the
/// input.
pub fn purge(collection: &TaskCollection) -> TaskCollection {
    let purged = collection.iter().filter(|task| task.removed).count();
    if purged == 0 {
        return collection.clone();
    }

    debug!(
        "event=task_purge module=store status=ok purged={} remaining={}",
        purged,
        collection.len() - purged
    );
    collection
        .iter()
        .filter(|task| task.is_active())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{add, purge, set_checked};
    use crate::model::task::{TaskCollection, TaskId};
    use crate::store::id_allocator::{IdAllocator, SequentialIdAllocator};

    /// Counts calls and hands out IDs from a fixed list.
    struct ScriptedIds {
        ids: Vec<Option<TaskId>>,
        calls: usize,
    }

    impl IdAllocator for ScriptedIds {
        fn next_id(&mut self) -> Option<TaskId> {
            let id = self.ids.get(self.calls).copied().flatten();
            self.calls += 1;
            id
        }
    }

    #[test]
    fn rejected_add_does_not_consume_id() {
        let mut alloc = ScriptedIds {
            ids: vec![Some(TaskId::from_raw(5))],
            calls: 0,
        };
        let tasks = add(&TaskCollection::new(), &mut alloc, "   ");
        assert!(tasks.is_empty());
        assert_eq!(alloc.calls, 0);

        let tasks = add(&tasks, &mut alloc, "real");
        assert_eq!(tasks.ids(), vec![TaskId::from_raw(5)]);
    }

    #[test]
    fn exhausted_allocator_turns_add_into_noop() {
        let mut alloc = ScriptedIds {
            ids: vec![Some(TaskId::from_raw(u64::MAX)), None],
            calls: 0,
        };
        let tasks = add(&TaskCollection::new(), &mut alloc, "last one");
        let next = add(&tasks, &mut alloc, "one too many");

        assert!(next.shares_storage_with(&tasks));
        assert_eq!(next.ids(), vec![TaskId::from_raw(u64::MAX)]);
    }

    #[test]
    fn noop_results_share_storage() {
        let mut alloc = SequentialIdAllocator::new();
        let tasks = add(&TaskCollection::new(), &mut alloc, "one");

        assert!(add(&tasks, &mut alloc, "").shares_storage_with(&tasks));
        assert!(set_checked(&tasks, TaskId::from_raw(99), true).shares_storage_with(&tasks));
        assert!(purge(&tasks).shares_storage_with(&tasks));
    }

    #[test]
    fn add_keeps_text_verbatim() {
        let mut alloc = SequentialIdAllocator::new();
        let tasks = add(&TaskCollection::new(), &mut alloc, "  padded  ");
        assert_eq!(tasks.first().map(|task| task.text.as_str()), Some("  padded  "));
    }
}
