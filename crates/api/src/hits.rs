//! Thread-safe visit counter.

use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide request counter backed by an atomic.
///
/// The counter is a statistic, not a synchronization point, so all accesses
/// use relaxed ordering. Cheap to share behind an `Arc`; increments and
/// resets never block.
#[derive(Debug, Default)]
pub struct HitCounter(AtomicU64);

impl HitCounter {
    /// Creates a counter starting at zero.
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    /// Records one hit and returns the updated count.
    pub fn record(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Returns the current count without modifying it.
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    /// Resets the count to zero.
    pub fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}
