//! Configuration management for sphincs-timing.
//!
//! Reads configuration from environment variables. `main` loads a `.env`
//! file first, so real environment variables take precedence over it.

use anyhow::{Context, Result};

use crate::report::DEFAULT_ALGORITHM;
use crate::workload::WorkloadParams;

pub const ENV_ALGORITHM: &str = "SPHINCS_TIMING_ALGORITHM";
pub const ENV_PREPROCESSING_ROUNDS: &str = "SPHINCS_TIMING_PREPROCESSING_ROUNDS";
pub const ENV_FORS_ROUNDS: &str = "SPHINCS_TIMING_FORS_ROUNDS";
pub const ENV_MERKLE_ROUNDS: &str = "SPHINCS_TIMING_MERKLE_ROUNDS";

/// Effective configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Algorithm name in the report title
    pub algorithm: String,
    /// Default workload shape for `run`
    pub workload: WorkloadParams,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let algorithm = lookup(ENV_ALGORITHM)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ALGORITHM.to_string());

        let defaults = WorkloadParams::default();
        let rounds = |key: &str, default: u32| -> Result<u32> {
            match lookup(key) {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{key} must be a non-negative integer, got {raw:?}")),
                None => Ok(default),
            }
        };

        let workload = WorkloadParams {
            preprocessing_rounds: rounds(ENV_PREPROCESSING_ROUNDS, defaults.preprocessing_rounds)?,
            fors_rounds: rounds(ENV_FORS_ROUNDS, defaults.fors_rounds)?,
            merkle_rounds: rounds(ENV_MERKLE_ROUNDS, defaults.merkle_rounds)?,
        };

        Ok(Self {
            algorithm,
            workload,
        })
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  {}: {}", ENV_ALGORITHM, self.algorithm);
        println!("  {}: {}", ENV_PREPROCESSING_ROUNDS, self.workload.preprocessing_rounds);
        println!("  {}: {}", ENV_FORS_ROUNDS, self.workload.fors_rounds);
        println!("  {}: {}", ENV_MERKLE_ROUNDS, self.workload.merkle_rounds);
    }
}
