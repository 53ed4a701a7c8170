//! Monotonic clock seam
//!
//! The registry needs exactly one host capability: the current monotonic
//! time as an integer nanosecond count, non-decreasing within a process.
//! The trait keeps that capability injectable so tests can drive time by
//! hand.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Passive time reference; queried, never scheduling anything itself.
pub trait MonotonicClock: Send + Sync {
    /// Current time in nanoseconds since an arbitrary per-clock epoch.
    fn now_ns(&self) -> u128;
}

impl<C: MonotonicClock + ?Sized> MonotonicClock for Arc<C> {
    fn now_ns(&self) -> u128 {
        (**self).now_ns()
    }
}

/// Default clock backed by [`std::time::Instant`], anchored at creation.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for SystemClock {
    fn now_ns(&self) -> u128 {
        self.origin.elapsed().as_nanos()
    }
}

/// Hand-driven clock for deterministic tests.
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: AtomicU64::new(0),
        }
    }

    /// Move the clock forward by `ns` nanoseconds.
    pub fn advance(&self, ns: u64) {
        self.now.fetch_add(ns, Ordering::Relaxed);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for ManualClock {
    fn now_ns(&self) -> u128 {
        self.now.load(Ordering::Relaxed) as u128
    }
}
