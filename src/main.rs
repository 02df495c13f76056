//! sphincs-timing - time the phases of a SPHINCS+ signing operation.
//!
//! Runs a synthetic signing workload and prints how long preprocessing,
//! FORS signing and Merkle signing took, absolute and as a share of the total.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use sphincs_timing::commands::{self, run::RunOptions, show};
use sphincs_timing::config::Config;

#[derive(Parser)]
#[command(name = "sphincs-timing")]
#[command(about = "Phase timing for SPHINCS+ signing")]
#[command(
    after_help = "QUICK START:\n  sphincs-timing run          Time one signing run\n  sphincs-timing show config  Show effective configuration"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time one synthetic signing operation and print the phase report
    Run {
        /// Message to sign
        #[arg(short, long, default_value = "sphincs-timing")]
        message: String,
        /// Hash rounds in the preprocessing phase
        #[arg(long)]
        preprocessing_rounds: Option<u32>,
        /// Hash rounds in the FORS phase
        #[arg(long)]
        fors_rounds: Option<u32>,
        /// Hash rounds in the Merkle phase
        #[arg(long)]
        merkle_rounds: Option<u32>,
        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show information
    Show {
        #[command(subcommand)]
        what: ShowTarget,
    },
}

#[derive(Subcommand)]
enum ShowTarget {
    /// Show current configuration
    Config,
}

/// Load `.env` from `path`, or search upward from the current directory.
fn load_dotenv(path: Option<&Path>) {
    match path {
        Some(path) => {
            dotenvy::from_path(path).ok();
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }
}

fn log_filter() -> EnvFilter {
    let default_level = "warn";
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(default_level))
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env if present, before logging so RUST_LOG from it applies
    load_dotenv(None);
    init_logging();
    let config = Config::load()?;

    match cli.command {
        Commands::Run {
            message,
            preprocessing_rounds,
            fors_rounds,
            merkle_rounds,
            output,
        } => {
            let opts = RunOptions {
                message,
                preprocessing_rounds,
                fors_rounds,
                merkle_rounds,
                output,
            };
            commands::cmd_run(&opts, &config)?;
        }

        Commands::Show { what } => {
            let show_target = match what {
                ShowTarget::Config => show::ShowTarget::Config,
            };
            commands::cmd_show(show_target, &config)?;
        }
    }

    Ok(())
}
