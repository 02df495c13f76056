//! Interval timing for signing phases.

use std::time::Duration;

use crate::clock::{Clock, MonotonicClock, Timestamp};

/// A monotonic start/end pair for one span of work.
///
/// Zero-initialized until driven. Ordering is the caller's job: `end` before
/// `begin` yields a meaningless elapsed value, never a panic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntervalTimer {
    start: Timestamp,
    end: Timestamp,
    elapsed_ns: i64,
}

impl IntervalTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the span on the monotonic clock. Discards any previous interval.
    pub fn begin(&mut self) {
        self.begin_with(&MonotonicClock);
    }

    /// Close the span on the monotonic clock and compute the elapsed time.
    pub fn end(&mut self) {
        self.end_with(&MonotonicClock);
    }

    /// Start the span on `clock`. Discards any previous interval.
    pub fn begin_with<C: Clock + ?Sized>(&mut self, clock: &C) {
        self.start = clock.now();
        self.end = Timestamp::ZERO;
        self.elapsed_ns = 0;
    }

    /// Close the span on `clock` and compute the elapsed time.
    pub fn end_with<C: Clock + ?Sized>(&mut self, clock: &C) {
        self.end = clock.now();
        self.elapsed_ns = self.end.nanos_since(self.start);
    }

    /// Run `f` inside a begin/end pair and hand back its result.
    pub fn measure<T>(&mut self, f: impl FnOnce() -> T) -> T {
        self.measure_with(&MonotonicClock, f)
    }

    pub fn measure_with<C: Clock + ?Sized, T>(&mut self, clock: &C, f: impl FnOnce() -> T) -> T {
        self.begin_with(clock);
        let out = f();
        self.end_with(clock);
        out
    }

    pub fn elapsed_ns(&self) -> i64 {
        self.elapsed_ns
    }

    pub fn milliseconds(&self) -> f64 {
        self.elapsed_ns as f64 / 1_000_000.0
    }

    pub fn microseconds(&self) -> f64 {
        self.elapsed_ns as f64 / 1_000.0
    }

    /// Elapsed time as a `Duration`; a negative interval reads as zero.
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(u64::try_from(self.elapsed_ns).unwrap_or(0))
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end_time(&self) -> Timestamp {
        self.end
    }
}
