//! CLI module for montepi.
//!
//! All CLI logic lives here so it can be tested; `main.rs` only parses
//! arguments, installs logging and calls [`run_cli`].

mod args;
mod commands;
mod output;

pub use args::{Args, Command, RunOptions};
pub use commands::{check_config, execute_run, run_cli, run_simulation};
pub use output::{
    print_help, print_version, write_history, write_json_summary, write_points_table, write_stats,
};

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects `trace`
/// for this crate and `warn` everywhere else.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,montepi=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A second install (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests;
