//! Memoization cells used by generated immutable objects.
//!
//! Both cells implement a single-writer-wins race: every writer computes the
//! same deterministic value for a truly immutable object, so the outcome of
//! the race is observationally irrelevant.

use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

/// Memoized 32-bit hash with `0` as the "not yet computed" sentinel.
///
/// A value that genuinely hashes to `0` is recomputed on every call, which
/// is the same trade the sentinel makes in the classic volatile-int scheme.
#[derive(Debug, Default)]
pub struct CachedHash {
    value: AtomicI32,
}

impl CachedHash {
    /// Creates an empty cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: AtomicI32::new(0),
        }
    }

    /// Returns the memoized hash, computing and storing it if unset.
    pub fn get_or_compute(&self, compute: impl FnOnce() -> i32) -> i32 {
        let existing = self.value.load(Ordering::Relaxed);
        if existing != 0 {
            return existing;
        }

        let computed = compute();
        self.value.store(computed, Ordering::Relaxed);
        computed
    }

    /// Drops the memoized hash.
    pub fn clear(&self) {
        self.value.store(0, Ordering::Relaxed);
    }
}

/// Memoized rendered text.
///
/// Readers share the rendered text through an `Arc` so clearing never
/// invalidates text already handed out.
#[derive(Debug, Default)]
pub struct CachedText {
    value: Mutex<Option<Arc<str>>>,
}

impl CachedText {
    /// Creates an empty cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: Mutex::new(None),
        }
    }

    /// Returns the memoized text, computing and storing it if unset.
    pub fn get_or_compute(&self, compute: impl FnOnce() -> String) -> Arc<str> {
        let mut guard = self.value.lock();
        if let Some(existing) = guard.as_ref() {
            return Arc::clone(existing);
        }

        let computed: Arc<str> = Arc::from(compute());
        *guard = Some(Arc::clone(&computed));
        computed
    }

    /// Drops the memoized text, best-effort.
    ///
    /// Uses `try_lock` so a clear never blocks behind a concurrent compute;
    /// losing that race leaves the freshly computed value in place.
    pub fn clear(&self) {
        if let Some(mut guard) = self.value.try_lock() {
            *guard = None;
        }
    }
}
