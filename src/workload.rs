//! Synthetic signing workload.
//!
//! Stands in for the real SPHINCS+ signer: three hash-chaining phases shaped
//! like preprocessing, FORS and the Merkle hypertree, each bracketed by its
//! timer inside the total span. The digest is not a signature.

use sha2::{Digest, Sha256};

use crate::clock::{Clock, MonotonicClock};
use crate::report::SigningTiming;

/// Hash rounds per phase.
///
/// Every phase chains its input exactly that many times. Preprocessing
/// additionally hashes the message once before chaining, so zero rounds
/// still yields the message digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadParams {
    pub preprocessing_rounds: u32,
    pub fors_rounds: u32,
    pub merkle_rounds: u32,
}

impl Default for WorkloadParams {
    fn default() -> Self {
        Self {
            preprocessing_rounds: 64,
            fors_rounds: 4_096,
            merkle_rounds: 16_384,
        }
    }
}

/// Result of one timed signing run.
#[derive(Debug, Clone)]
pub struct SignOutcome {
    pub digest: [u8; 32],
    pub timing: SigningTiming,
}

/// Sign `message` on the monotonic clock.
pub fn sign_with_timing(message: &[u8], params: &WorkloadParams) -> SignOutcome {
    sign_with_clock(&MonotonicClock, message, params)
}

pub fn sign_with_clock<C: Clock + ?Sized>(
    clock: &C,
    message: &[u8],
    params: &WorkloadParams,
) -> SignOutcome {
    let mut timing = SigningTiming::new();
    timing.total.begin_with(clock);

    let seed = timing.preprocessing.measure_with(clock, || {
        let state: [u8; 32] = Sha256::digest(message).into();
        rounds(state, b"prep", params.preprocessing_rounds)
    });
    let fors_root = timing
        .fors_signing
        .measure_with(clock, || rounds(seed, b"fors", params.fors_rounds));
    let digest = timing
        .merkle_signing
        .measure_with(clock, || rounds(fors_root, b"tree", params.merkle_rounds));

    timing.total.end_with(clock);

    tracing::debug!(
        preprocessing_us = timing.preprocessing.microseconds(),
        fors_us = timing.fors_signing.microseconds(),
        merkle_us = timing.merkle_signing.microseconds(),
        total_us = timing.total.microseconds(),
        "signing phases complete"
    );

    SignOutcome { digest, timing }
}

fn rounds(mut state: [u8; 32], domain: &[u8], n: u32) -> [u8; 32] {
    for _ in 0..n {
        state = chain(&state, domain);
    }
    state
}

fn chain(state: &[u8; 32], domain: &[u8]) -> [u8; 32] {
    let mut h = Sha256::new();
    h.update(domain);
    h.update(state);
    h.finalize().into()
}
