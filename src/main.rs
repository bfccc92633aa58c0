//! montepi CLI - Monte Carlo estimation of pi
//!
//! Thin wrapper: all logic lives in [`montepi::cli`].

use montepi::cli::{init_tracing, run_cli, Args};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose());
    run_cli(args)
}
