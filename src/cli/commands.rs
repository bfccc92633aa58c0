//! CLI command handlers.

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use tracing::{info, trace};

use super::output::{
    print_help, print_version, write_history, write_json_summary, write_points_table, write_stats,
};
use super::{Args, Command, RunOptions};
use crate::config::PiConfig;
use crate::error::PiResult;
use crate::estimator::{BatchSize, Sample, Simulation};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run(opts) => run_simulation(&opts),
        Command::CheckConfig { config_path } => check_config(&config_path),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Run the simulation and print results to stdout.
#[must_use]
pub fn run_simulation(opts: &RunOptions) -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match execute_run(opts, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if e.is_input_rejection() {
                eprintln!("Run 'montepi help' for usage.");
            }
            ExitCode::from(1)
        }
    }
}

/// Execute the `run` command, writing tables (or JSON) to `out`.
///
/// Input is fully validated before the first sample is drawn. Returns the
/// finished session.
///
/// # Errors
///
/// Returns an error for unreadable or invalid configuration, a rejected
/// batch size, or a failed write.
pub fn execute_run<W: Write>(opts: &RunOptions, out: &mut W) -> PiResult<Simulation> {
    let mut config = match &opts.config_path {
        Some(path) => PiConfig::load(path)?,
        None => PiConfig::default(),
    };
    if let Some(seed) = opts.seed_override {
        config.reproducibility.seed = Some(seed);
    }
    if let Some(rows) = opts.max_rows {
        config.display.max_table_rows = rows;
    }

    let size = match &opts.batch {
        Some(text) => BatchSize::parse(text)?,
        None => config.batch_size()?,
    };

    let mut sim = Simulation::from_config(&config)?;
    info!(seed = sim.seed(), n = size.get(), runs = opts.runs, "starting simulation");

    for _ in 0..opts.runs {
        let result = sim.run_observed(size.get(), &mut |s: &Sample| {
            trace!(x = s.x, y = s.y, inside = s.inside, "sample");
        })?;
        if !opts.json {
            if config.display.show_points {
                write_points_table(out, result, config.display.max_table_rows)?;
            }
            write_stats(out, result)?;
        }
    }

    if opts.json {
        write_json_summary(
            out,
            sim.seed(),
            sim.region(),
            sim.last_result(),
            sim.history(),
        )?;
    } else {
        write_history(out, sim.history())?;
    }

    Ok(sim)
}

/// Validate a configuration file.
#[must_use]
pub fn check_config(path: &Path) -> ExitCode {
    println!("Validating: {}\n", path.display());

    match PiConfig::load(path) {
        Ok(config) => {
            let r = &config.region;
            println!("✓ Configuration valid");
            println!("  Region:     [{}..={}] x [{}..={}]", r.left, r.right, r.top, r.bottom);
            println!("  Batch size: {}", config.batch.size);
            match config.reproducibility.seed {
                Some(seed) => println!("  Seed:       {seed}"),
                None => println!("  Seed:       (entropy)"),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ {e}");
            ExitCode::from(1)
        }
    }
}
