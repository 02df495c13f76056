//! Run command - time one synthetic signing operation.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::config::Config;
use crate::workload::{self, WorkloadParams};

/// Options for the run command. Unset fields fall back to the config.
#[derive(Debug, Default)]
pub struct RunOptions {
    pub message: String,
    pub preprocessing_rounds: Option<u32>,
    pub fors_rounds: Option<u32>,
    pub merkle_rounds: Option<u32>,
    /// Write the report here instead of stdout
    pub output: Option<PathBuf>,
}

impl RunOptions {
    fn params(&self, config: &Config) -> WorkloadParams {
        WorkloadParams {
            preprocessing_rounds: self
                .preprocessing_rounds
                .unwrap_or(config.workload.preprocessing_rounds),
            fors_rounds: self.fors_rounds.unwrap_or(config.workload.fors_rounds),
            merkle_rounds: self.merkle_rounds.unwrap_or(config.workload.merkle_rounds),
        }
    }
}

/// Execute the run command.
pub fn cmd_run(opts: &RunOptions, config: &Config) -> Result<()> {
    let params = opts.params(config);
    tracing::debug!(?params, "starting signing run");

    let outcome = workload::sign_with_timing(opts.message.as_bytes(), &params);
    tracing::info!(
        total_ms = outcome.timing.total.milliseconds(),
        digest = %hex(&outcome.digest),
        "signing run finished"
    );

    match &opts.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            outcome
                .timing
                .report_as(&config.algorithm, &mut out)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("Report written to {}", path.display());
        }
        None => {
            outcome
                .timing
                .print_as(&config.algorithm)
                .context("Failed to write report to stdout")?;
        }
    }

    Ok(())
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_rounds_override_config() {
        let config = Config::from_lookup(|_| None).unwrap();
        let opts = RunOptions {
            fors_rounds: Some(7),
            ..RunOptions::default()
        };
        let params = opts.params(&config);
        assert_eq!(params.fors_rounds, 7);
        assert_eq!(
            params.merkle_rounds,
            WorkloadParams::default().merkle_rounds
        );
    }

    fn config_with_algorithm(algorithm: &str) -> Config {
        let algorithm = algorithm.to_string();
        Config::from_lookup(move |key| {
            (key == crate::config::ENV_ALGORITHM).then(|| algorithm.clone())
        })
        .unwrap()
    }

    fn small_run(output: Option<PathBuf>) -> RunOptions {
        RunOptions {
            message: "msg".to_string(),
            preprocessing_rounds: Some(1),
            fors_rounds: Some(4),
            merkle_rounds: Some(4),
            output,
        }
    }

    #[test]
    fn test_run_writes_report_file_with_configured_title() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let config = config_with_algorithm("SPHINCS+-SHA2-192f-simple");

        cmd_run(&small_run(Some(path.clone())), &config).unwrap();

        let report = std::fs::read_to_string(&path).unwrap();
        assert!(report.starts_with("SPHINCS+-SHA2-192f-simple Signing Timing Results:\n"));
        assert!(report.contains("  Total Signing:   "));
    }

    #[test]
    fn test_run_to_stdout_succeeds() {
        let config = Config::from_lookup(|_| None).unwrap();
        cmd_run(&small_run(None), &config).unwrap();
    }

    #[test]
    fn test_run_uncreatable_output_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/report.txt");
        let config = Config::from_lookup(|_| None).unwrap();

        let err = cmd_run(&small_run(Some(path)), &config).unwrap_err();
        assert!(err.to_string().contains("Failed to create"));
    }

    #[test]
    fn test_hex() {
        assert_eq!(hex(&[0x00, 0xab, 0x7f]), "00ab7f");
    }
}
