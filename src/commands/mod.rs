//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `run` - Time one synthetic signing operation and print the report
//! - `show` - Display information

pub mod run;
pub mod show;

pub use run::cmd_run;
pub use show::cmd_show;
