//! CLI output formatting.
//!
//! Table writers take any `io::Write` so their output can be checked in
//! tests.

use std::io::{self, Write};

use serde::Serialize;

use crate::error::{PiError, PiResult};
use crate::estimator::{BatchResult, History, Region};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Print version information.
pub fn print_version() {
    println!("montepi {}", env!("CARGO_PKG_VERSION"));
    if let Some(hash) = option_env!("GIT_HASH") {
        if !hash.is_empty() {
            println!("commit {hash}");
        }
    }
    if let Some(ts) = option_env!("BUILD_TIMESTAMP") {
        println!("built {ts}");
    }
}

/// Print help message.
pub fn print_help() {
    println!(
        r"montepi - Monte Carlo estimation of pi

USAGE:
    montepi <COMMAND> [OPTIONS]

COMMANDS:
    run [N]                     Sample N points and estimate pi
        --runs <K>              Repeat the run K times (default: 1)
        --seed <S>              Seed the random source
        --config <FILE>         Load settings from a YAML file
        --max-rows <R>          Rows of the points table to print
        --json                  Print a JSON summary instead of tables
        -v, --verbose           Log every sample

    check-config <FILE>         Validate a configuration file

    help                        Show this help message
    version                     Show version information

EXAMPLES:
    montepi run 1000
    montepi run 5000 --runs 10 --seed 42
    montepi run --config montepi.yaml --json

Points inside or on the inscribed circle count toward the estimate
pi ~= 4 * inside / total.
"
    );
}

/// Write the points table, truncated to `max_rows` rows.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_points_table<W: Write>(
    w: &mut W,
    result: &BatchResult,
    max_rows: usize,
) -> io::Result<()> {
    writeln!(w, "Points")?;
    writeln!(w, "{:>8}  {:>8}  {:>8}  In Inner Circle", "#", "X", "Y")?;
    for (i, sample) in result.samples.iter().take(max_rows).enumerate() {
        writeln!(
            w,
            "{i:>8}  {:>8}  {:>8}  {}",
            sample.x, sample.y, sample.inside
        )?;
    }
    let hidden = result.samples.len().saturating_sub(max_rows);
    if hidden > 0 {
        writeln!(w, "  ... {hidden} more points not shown")?;
    }
    Ok(())
}

/// Write the summary counts and estimate for one batch.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_stats<W: Write>(w: &mut W, result: &BatchResult) -> io::Result<()> {
    writeln!(w, "{RULE}")?;
    writeln!(w, "Total # Points:          {}", result.total())?;
    writeln!(w, "# Points in circle:      {}", result.inside_count)?;
    writeln!(w, "# Points out of circle:  {}", result.outside_count)?;
    writeln!(w, "Pi Estimate:             {}", result.estimate)?;
    writeln!(w, "Absolute Error:          {:.6}", result.absolute_error())?;
    writeln!(w, "{RULE}")?;
    Ok(())
}

/// Write the estimate history table.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_history<W: Write>(w: &mut W, history: &History) -> io::Result<()> {
    writeln!(w, "Pi History")?;
    writeln!(w, "{:>6}  {:>10}  Estimate", "Run", "Points")?;
    for entry in history {
        writeln!(
            w,
            "{:>6}  {:>10}  {}",
            entry.index, entry.batch_size, entry.estimate
        )?;
    }
    if let Some(mean) = history.mean() {
        writeln!(w, "Mean over {} runs: {mean:.6}", history.len())?;
    }
    Ok(())
}

#[derive(Serialize)]
struct LastBatch {
    inside_count: u64,
    outside_count: u64,
    total: u64,
    estimate: f64,
    absolute_error: f64,
}

#[derive(Serialize)]
struct RunSummary<'a> {
    seed: u64,
    region: &'a Region,
    last_batch: Option<LastBatch>,
    history: &'a History,
}

/// Write a JSON summary of the session.
///
/// # Errors
///
/// Returns [`PiError::Serialization`] or [`PiError::Io`].
pub fn write_json_summary<W: Write>(
    w: &mut W,
    seed: u64,
    region: &Region,
    last: Option<&BatchResult>,
    history: &History,
) -> PiResult<()> {
    let summary = RunSummary {
        seed,
        region,
        last_batch: last.map(|r| LastBatch {
            inside_count: r.inside_count,
            outside_count: r.outside_count,
            total: r.total(),
            estimate: r.estimate,
            absolute_error: r.absolute_error(),
        }),
        history,
    };
    let json =
        serde_json::to_string_pretty(&summary).map_err(|e| PiError::serialization(e.to_string()))?;
    writeln!(w, "{json}")?;
    Ok(())
}
