//! Phase timing for SPHINCS+ signing.
//!
//! [`timing::IntervalTimer`] measures one span on the monotonic clock;
//! [`report::SigningTiming`] holds the preprocessing, FORS, Merkle and total
//! timers of one signing operation and writes the breakdown report.
//!
//! See `tests/` for integration coverage.

pub mod clock;
pub mod commands;
pub mod config;
pub mod report;
pub mod timing;
pub mod workload;

pub use clock::{Clock, ManualClock, MonotonicClock, Timestamp};
pub use report::{PhaseShares, SigningTiming, DEFAULT_ALGORITHM};
pub use timing::IntervalTimer;
