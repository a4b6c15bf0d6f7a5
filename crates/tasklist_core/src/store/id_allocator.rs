//! Task identifier allocation.
//!
//! # Responsibility
//! - Issue a fresh `TaskId` for every created task.
//!
//! # Invariants
//! - Every allocator draws from one process-wide high-water mark, so IDs are
//!   unique for the lifetime of the process across all allocators and
//!   sessions, regardless of call rate or wall-clock movement.
//! - Issued IDs are strictly increasing process-wide.
//! - Once `u64::MAX` has been issued, allocation fails instead of repeating.
//! - Allocators are not `Clone`; a copy cannot replay IDs.

use crate::model::task::TaskId;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Highest ID issued so far in this process; 0 means none yet.
static LAST_ISSUED: AtomicU64 = AtomicU64::new(0);

/// Source of unique task identifiers.
pub trait IdAllocator {
    /// Returns an ID greater than every ID previously issued in the process,
    /// or `None` once the ID space is exhausted.
    fn next_id(&mut self) -> Option<TaskId>;
}

impl<A: IdAllocator + ?Sized> IdAllocator for &mut A {
    fn next_id(&mut self) -> Option<TaskId> {
        (**self).next_id()
    }
}

/// Counter allocator: issues the next integer after the high-water mark.
#[derive(Debug, Default)]
pub struct SequentialIdAllocator {
    _private: (),
}

impl SequentialIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdAllocator for SequentialIdAllocator {
    fn next_id(&mut self) -> Option<TaskId> {
        issue_after(&LAST_ISSUED, 0).map(TaskId::from_raw)
    }
}

/// Millisecond timestamp allocator with a tie-break.
///
/// Issues `max(now_ms, last + 1)`, so two calls inside one clock tick, or
/// after the clock steps backwards, still get distinct increasing IDs.
pub struct ClockIdAllocator<C = fn() -> u64> {
    clock: C,
}

impl ClockIdAllocator {
    /// Uses the system wall clock.
    pub fn new() -> Self {
        Self::with_clock(system_clock_ms)
    }
}

impl Default for ClockIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: FnMut() -> u64> ClockIdAllocator<C> {
    /// Uses a caller-provided millisecond clock.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: FnMut() -> u64> IdAllocator for ClockIdAllocator<C> {
    fn next_id(&mut self) -> Option<TaskId> {
        let now = (self.clock)();
        issue_after(&LAST_ISSUED, now).map(TaskId::from_raw)
    }
}

/// Advances `last_issued` to `max(last + 1, floor)` and returns the new value.
///
/// Returns `None` without touching `last_issued` once it holds `u64::MAX`.
fn issue_after(last_issued: &AtomicU64, floor: u64) -> Option<u64> {
    let step = move |last: u64| last.checked_add(1).map(|next| next.max(floor));
    last_issued
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, step)
        .ok()
        .and_then(step)
}

fn system_clock_ms() -> u64 {
    // Clock before the epoch collapses to 0; the tie-break keeps IDs unique.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{issue_after, ClockIdAllocator, IdAllocator, SequentialIdAllocator};
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn issue_after_counts_up_and_respects_floor() {
        let last = AtomicU64::new(0);
        assert_eq!(issue_after(&last, 0), Some(1));
        assert_eq!(issue_after(&last, 0), Some(2));
        assert_eq!(issue_after(&last, 500), Some(500));
        assert_eq!(issue_after(&last, 100), Some(501));
        assert_eq!(last.load(Ordering::SeqCst), 501);
    }

    #[test]
    fn issue_after_fails_once_max_is_issued() {
        let last = AtomicU64::new(u64::MAX - 1);
        assert_eq!(issue_after(&last, 0), Some(u64::MAX));
        assert_eq!(issue_after(&last, 0), None);
        assert_eq!(issue_after(&last, u64::MAX), None);
        assert_eq!(last.load(Ordering::SeqCst), u64::MAX);
    }

    #[test]
    fn separate_sequential_allocators_never_collide() {
        let mut first = SequentialIdAllocator::new();
        let mut second = SequentialIdAllocator::new();

        let a = first.next_id().unwrap();
        let b = second.next_id().unwrap();
        let c = first.next_id().unwrap();

        assert!(a < b && b < c);
    }

    #[test]
    fn clock_breaks_ties_within_one_tick() {
        let mut alloc = ClockIdAllocator::with_clock(|| 1_000);
        let ids: Vec<u64> = (0..3).map(|_| alloc.next_id().unwrap().get()).collect();

        assert!(ids[0] >= 1_000);
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]), "{ids:?}");
    }

    #[test]
    fn clock_survives_backwards_step() {
        let mut ticks = vec![500, 900, 100].into_iter();
        let mut alloc = ClockIdAllocator::with_clock(move || ticks.next().unwrap_or(0));

        let first = alloc.next_id().unwrap();
        let second = alloc.next_id().unwrap();
        let third = alloc.next_id().unwrap();

        assert!(first.get() >= 500);
        assert!(second.get() >= 900 && second > first);
        assert!(third > second);
    }

    #[test]
    fn clock_and_sequential_allocators_share_one_sequence() {
        let mut clock = ClockIdAllocator::with_clock(|| 2_000);
        let mut counter = SequentialIdAllocator::new();

        let from_clock = clock.next_id().unwrap();
        let from_counter = counter.next_id().unwrap();
        let again_clock = clock.next_id().unwrap();

        assert!(from_clock < from_counter && from_counter < again_clock);
    }
}
