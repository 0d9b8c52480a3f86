//! Counting global allocator for heap accounting tests.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicU64, Ordering};

/// A `GlobalAlloc` that forwards to the system allocator and counts
/// allocations and deallocations.
///
/// Install one per test binary:
///
/// ```ignore
/// #[global_allocator]
/// static ALLOC: CountingAllocator = CountingAllocator::new();
/// ```
///
/// The counters are process-wide and include the runtime's own activity, so
/// they support coarse "every buffer acquired was released" assertions around
/// a scope rather than exact byte accounting.
pub struct CountingAllocator {
    allocs: AtomicU64,
    deallocs: AtomicU64,
}

impl CountingAllocator {
    pub const fn new() -> CountingAllocator {
        CountingAllocator {
            allocs: AtomicU64::new(0),
            deallocs: AtomicU64::new(0),
        }
    }

    /// Number of successful allocations performed so far.
    pub fn allocs(&self) -> u64 {
        self.allocs.load(Ordering::Relaxed)
    }

    /// Number of deallocations performed so far.
    pub fn deallocs(&self) -> u64 {
        self.deallocs.load(Ordering::Relaxed)
    }

    /// Allocations minus deallocations.
    ///
    /// Reads deallocs first: a racing alloc/dealloc pair can inflate the
    /// balance but never drive it negative.
    pub fn balance(&self) -> i64 {
        let deallocs = self.deallocs.load(Ordering::Relaxed);
        let allocs = self.allocs.load(Ordering::Relaxed);
        allocs as i64 - deallocs as i64
    }
}

impl Default for CountingAllocator {
    fn default() -> CountingAllocator {
        CountingAllocator::new()
    }
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            self.allocs.fetch_add(1, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        self.deallocs.fetch_add(1, Ordering::Relaxed);
        unsafe { System.dealloc(ptr, layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        // A successful realloc retires the old block and produces a new one.
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            self.allocs.fetch_add(1, Ordering::Relaxed);
            self.deallocs.fetch_add(1, Ordering::Relaxed);
        }
        new_ptr
    }
}
