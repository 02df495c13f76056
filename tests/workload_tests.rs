//! The synthetic signer honours the timing caller contract.

use sphincs_timing::workload::{sign_with_clock, WorkloadParams};
use sphincs_timing::{Clock, Timestamp};
use std::cell::Cell;

/// Ticks one microsecond every time it is read.
struct TickingClock(Cell<u64>);

impl Clock for TickingClock {
    fn now(&self) -> Timestamp {
        let n = self.0.get();
        self.0.set(n + 1_000);
        Timestamp::from_nanos(n)
    }
}

#[test]
fn test_each_phase_is_one_tick_inside_total() {
    let clock = TickingClock(Cell::new(0));
    let outcome = sign_with_clock(&clock, b"message", &WorkloadParams::default());
    let t = outcome.timing;

    // Seven reads: total begin, begin/end per phase, total end.
    assert_eq!(t.preprocessing.elapsed_ns(), 1_000);
    assert_eq!(t.fors_signing.elapsed_ns(), 1_000);
    assert_eq!(t.merkle_signing.elapsed_ns(), 1_000);
    assert_eq!(t.total.elapsed_ns(), 6_000);

    let shares = t.percentages().unwrap();
    assert!((shares.fors_signing - 100.0 / 6.0).abs() < 1e-9);
}
