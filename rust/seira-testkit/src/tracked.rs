//! Lifecycle-counting element type for container tests.

use std::cell::Cell;

thread_local! {
    static CREATED: Cell<u64> = const { Cell::new(0) };
    static DROPPED: Cell<u64> = const { Cell::new(0) };
}

/// An element that counts its constructions and drops on the current thread.
///
/// `Tracked` stands in for a real payload in container tests: every way a
/// `Tracked` value can come into existence (`new`, `default`, `clone`) bumps
/// the created counter, and its `Drop` bumps the dropped counter. A container
/// with correct value semantics leaves the two counters equal once every
/// instance has gone out of scope.
///
/// The counters are thread-local, so parallel test threads do not disturb
/// each other.
#[derive(Debug, PartialEq, Eq)]
pub struct Tracked {
    pub value: u64,
}

impl Tracked {
    pub fn new(value: u64) -> Tracked {
        CREATED.with(|c| c.set(c.get() + 1));
        Tracked { value }
    }

    /// Number of `Tracked` values created on this thread since the last
    /// [`reset`](Tracked::reset).
    pub fn created() -> u64 {
        CREATED.with(Cell::get)
    }

    /// Number of `Tracked` values dropped on this thread since the last
    /// [`reset`](Tracked::reset).
    pub fn dropped() -> u64 {
        DROPPED.with(Cell::get)
    }

    /// Number of values currently alive on this thread.
    pub fn live() -> u64 {
        Self::created() - Self::dropped()
    }

    /// Zeroes both counters.
    ///
    /// Call at the start of a test, while no `Tracked` instances from earlier
    /// tests are alive on this thread.
    pub fn reset() {
        CREATED.with(|c| c.set(0));
        DROPPED.with(|c| c.set(0));
    }
}

impl Default for Tracked {
    fn default() -> Tracked {
        Tracked::new(0)
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Tracked {
        Tracked::new(self.value)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        DROPPED.with(|c| c.set(c.get() + 1));
    }
}
