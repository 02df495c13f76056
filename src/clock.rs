//! Monotonic clock sources.
//!
//! Timers read time through the [`Clock`] trait so the signing path uses the
//! platform monotonic timer while tests can replay exact synthetic delays.

use std::cell::Cell;
use std::sync::OnceLock;
use std::time::Instant;

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// A (seconds, nanoseconds) reading from a monotonic clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp {
    pub secs: i64,
    pub nanos: i64,
}

impl Timestamp {
    /// Zero-initialized reading, the state of a timer that never ran.
    pub const ZERO: Self = Self { secs: 0, nanos: 0 };

    pub const fn new(secs: i64, nanos: i64) -> Self {
        Self { secs, nanos }
    }

    /// Build a normalized timestamp from a nanosecond count.
    pub fn from_nanos(nanos: u64) -> Self {
        let secs = (nanos / NANOS_PER_SEC as u64) as i64;
        let nanos = (nanos % NANOS_PER_SEC as u64) as i64;
        Self { secs, nanos }
    }

    /// Nanoseconds from `earlier` to `self`.
    ///
    /// Subtracts the second and sub-second components pairwise, so a
    /// sub-second borrow shows up as a negative nanosecond term rather than
    /// being truncated. Saturates on overflow.
    pub fn nanos_since(&self, earlier: Timestamp) -> i64 {
        let secs = self.secs.saturating_sub(earlier.secs);
        let nanos = self.nanos.saturating_sub(earlier.nanos);
        secs.saturating_mul(NANOS_PER_SEC).saturating_add(nanos)
    }
}

/// Source of monotonic timestamps.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// The platform monotonic timer.
///
/// Readings are measured from a process-wide origin taken on first use.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

fn origin() -> Instant {
    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    *ORIGIN.get_or_init(Instant::now)
}

impl Clock for MonotonicClock {
    fn now(&self) -> Timestamp {
        let since = origin().elapsed();
        Timestamp {
            secs: since.as_secs() as i64,
            nanos: i64::from(since.subsec_nanos()),
        }
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Timestamp>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, ts: Timestamp) {
        self.now.set(ts);
    }

    /// Move the clock forward, carrying whole seconds out of the nanosecond field.
    pub fn advance_nanos(&self, delta: u64) {
        let cur = self.now.get();
        let total = cur.nanos + (delta % NANOS_PER_SEC as u64) as i64;
        let secs = cur.secs + (delta / NANOS_PER_SEC as u64) as i64 + total / NANOS_PER_SEC;
        self.now.set(Timestamp {
            secs,
            nanos: total % NANOS_PER_SEC,
        });
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}
