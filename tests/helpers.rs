//! Shared test utilities for sphincs-timing tests.

#![allow(dead_code)]

use sphincs_timing::{IntervalTimer, ManualClock, SigningTiming};

/// Drive `timer` across exactly `nanos` of synthetic time.
pub fn span(clock: &ManualClock, timer: &mut IntervalTimer, nanos: u64) {
    timer.begin_with(clock);
    clock.advance_nanos(nanos);
    timer.end_with(clock);
}

/// Timing for a run whose phases take the given nanoseconds back to back,
/// with the total bracketing all three.
pub fn nested_timing(pre: u64, fors: u64, merkle: u64) -> SigningTiming {
    let clock = ManualClock::default();
    let mut timing = SigningTiming::new();
    timing.total.begin_with(&clock);
    span(&clock, &mut timing.preprocessing, pre);
    span(&clock, &mut timing.fors_signing, fors);
    span(&clock, &mut timing.merkle_signing, merkle);
    timing.total.end_with(&clock);
    timing
}

/// Render the default-titled report into a string.
pub fn render(timing: &SigningTiming) -> String {
    let mut buf = Vec::new();
    timing.report(&mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("report is UTF-8")
}
