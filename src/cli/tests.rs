//! CLI module tests.

use super::args::{Args, Command, RunOptions};
use super::commands::execute_run;
use super::output::{write_history, write_json_summary, write_points_table, write_stats};
use crate::error::PiError;
use crate::estimator::{BatchResult, History, Region, Sample};
use std::io::Write;
use std::path::PathBuf;

fn run_opts(batch: &str) -> RunOptions {
    RunOptions {
        batch: Some(batch.to_string()),
        runs: 1,
        seed_override: Some(42),
        ..RunOptions::default()
    }
}

fn small_result() -> BatchResult {
    BatchResult::from_samples(vec![
        Sample { x: 150, y: 150, inside: true },
        Sample { x: 20, y: 20, inside: false },
        Sample { x: 150, y: 20, inside: true },
    ])
    .unwrap()
}

// ============================================================================
// Args parsing tests
// ============================================================================

#[test]
fn test_parse_no_args_shows_help() {
    let args = Args::parse_from(["montepi"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_help_flags() {
    for flag in ["-h", "--help", "help"] {
        let args = Args::parse_from(["montepi", flag]);
        assert_eq!(args.command, Command::Help);
    }
}

#[test]
fn test_parse_version_flags() {
    for flag in ["-V", "--version", "version"] {
        let args = Args::parse_from(["montepi", flag]);
        assert_eq!(args.command, Command::Version);
    }
}

#[test]
fn test_parse_unknown_command() {
    let args = Args::parse_from(["montepi", "unknown-cmd"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_run_defaults() {
    let args = Args::parse_from(["montepi", "run"]);
    match args.command {
        Command::Run(opts) => {
            assert_eq!(opts.batch, None);
            assert_eq!(opts.runs, 1);
            assert_eq!(opts.seed_override, None);
            assert!(!opts.json);
            assert!(!opts.verbose);
        }
        other => panic!("Expected Run command, got {other:?}"),
    }
}

#[test]
fn test_parse_run_full() {
    let args = Args::parse_from([
        "montepi", "run", "5000", "--runs", "3", "--seed", "7", "--config", "pi.yaml",
        "--max-rows", "4", "--json", "-v",
    ]);
    assert!(args.verbose());
    match args.command {
        Command::Run(opts) => {
            assert_eq!(opts.batch.as_deref(), Some("5000"));
            assert_eq!(opts.runs, 3);
            assert_eq!(opts.seed_override, Some(7));
            assert_eq!(opts.config_path, Some(PathBuf::from("pi.yaml")));
            assert_eq!(opts.max_rows, Some(4));
            assert!(opts.json);
            assert!(opts.verbose);
        }
        other => panic!("Expected Run command, got {other:?}"),
    }
}

#[test]
fn test_parse_run_keeps_raw_batch_text() {
    let args = Args::parse_from(["montepi", "run", "ten"]);
    match args.command {
        Command::Run(opts) => assert_eq!(opts.batch.as_deref(), Some("ten")),
        other => panic!("Expected Run command, got {other:?}"),
    }
}

#[test]
fn test_parse_run_negative_batch_is_positional() {
    let args = Args::parse_from(["montepi", "run", "-4"]);
    match args.command {
        Command::Run(opts) => assert_eq!(opts.batch.as_deref(), Some("-4")),
        other => panic!("Expected Run command, got {other:?}"),
    }
}

#[test]
fn test_parse_run_bad_runs_shows_help() {
    assert_eq!(
        Args::parse_from(["montepi", "run", "10", "--runs", "0"]).command,
        Command::Help
    );
    assert_eq!(
        Args::parse_from(["montepi", "run", "10", "--runs"]).command,
        Command::Help
    );
}

#[test]
fn test_parse_run_bad_seed_shows_help() {
    assert_eq!(
        Args::parse_from(["montepi", "run", "10", "--seed", "x"]).command,
        Command::Help
    );
}

#[test]
fn test_parse_check_config() {
    let args = Args::parse_from(["montepi", "check-config", "pi.yaml"]);
    assert_eq!(
        args.command,
        Command::CheckConfig {
            config_path: PathBuf::from("pi.yaml")
        }
    );
    assert!(!args.verbose());
}

#[test]
fn test_parse_check_config_missing_path() {
    let args = Args::parse_from(["montepi", "check-config"]);
    assert_eq!(args.command, Command::Help);
}

// ============================================================================
// Command execution tests
// ============================================================================

#[test]
fn test_execute_run_prints_tables() {
    let mut out = Vec::new();
    let sim = execute_run(&run_opts("1000"), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Points"));
    assert!(text.contains("Total # Points:          1000"));
    assert!(text.contains("Pi History"));
    assert!(text.contains("980 more points not shown"));
    assert_eq!(sim.history().len(), 1);
}

#[test]
fn test_execute_run_multiple_runs() {
    let opts = RunOptions {
        runs: 4,
        ..run_opts("200")
    };
    let mut out = Vec::new();
    let sim = execute_run(&opts, &mut out).unwrap();
    assert_eq!(sim.history().len(), 4);
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("Total # Points:").count(), 4);
    assert!(text.contains("Mean over 4 runs"));
}

#[test]
fn test_execute_run_reproducible_with_seed() {
    let mut a = Vec::new();
    let mut b = Vec::new();
    execute_run(&run_opts("300"), &mut a).unwrap();
    execute_run(&run_opts("300"), &mut b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_execute_run_rejects_non_numeric() {
    let mut out = Vec::new();
    let err = execute_run(&run_opts("abc"), &mut out).unwrap_err();
    assert!(matches!(err, PiError::NonNumericInput { .. }));
    assert!(out.is_empty(), "Nothing may be printed for rejected input");
}

#[test]
fn test_execute_run_rejects_zero_and_negative() {
    for text in ["0", "-5"] {
        let mut out = Vec::new();
        let err = execute_run(&run_opts(text), &mut out).unwrap_err();
        assert!(matches!(err, PiError::InvalidBatchSize { .. }));
    }
}

#[test]
fn test_execute_run_rejects_oversized_batch() {
    let mut out = Vec::new();
    let err = execute_run(&run_opts("9223372036854775807"), &mut out).unwrap_err();
    assert!(matches!(err, PiError::InvalidBatchSize { value: i64::MAX }));
    assert!(out.is_empty());
}

#[test]
fn test_execute_run_json() {
    let opts = RunOptions {
        json: true,
        runs: 2,
        ..run_opts("100")
    };
    let mut out = Vec::new();
    execute_run(&opts, &mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["seed"], 42);
    assert_eq!(value["last_batch"]["total"], 100);
    assert_eq!(value["history"]["entries"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_execute_run_with_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "region:\n  left: 20\n  right: 280\n  top: 20\n  bottom: 280\nbatch:\n  size: 50\ndisplay:\n  show_points: false\n"
    )
    .unwrap();

    let opts = RunOptions {
        batch: None,
        runs: 1,
        seed_override: Some(1),
        config_path: Some(file.path().to_path_buf()),
        ..RunOptions::default()
    };
    let mut out = Vec::new();
    let sim = execute_run(&opts, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(*sim.region(), Region::new(20, 280, 20, 280).unwrap());
    assert!(text.contains("Total # Points:          50"));
    assert!(!text.contains("In Inner Circle"));
}

#[test]
fn test_execute_run_missing_config() {
    let opts = RunOptions {
        config_path: Some(PathBuf::from("/nonexistent/pi.yaml")),
        ..run_opts("10")
    };
    let mut out = Vec::new();
    assert!(matches!(
        execute_run(&opts, &mut out),
        Err(PiError::Io(_))
    ));
}

// ============================================================================
// Output formatting tests
// ============================================================================

#[test]
fn test_write_points_table_rows() {
    let mut out = Vec::new();
    write_points_table(&mut out, &small_result(), 10).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("In Inner Circle"));
    assert!(text.contains("true"));
    assert!(text.contains("false"));
    assert!(!text.contains("more points"));
}

#[test]
fn test_write_points_table_truncates() {
    let mut out = Vec::new();
    write_points_table(&mut out, &small_result(), 1).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("2 more points not shown"));
}

#[test]
fn test_write_stats() {
    let mut out = Vec::new();
    write_stats(&mut out, &small_result()).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("# Points in circle:      2"));
    assert!(text.contains("# Points out of circle:  1"));
    assert!(text.contains("Pi Estimate:"));
}

#[test]
fn test_write_history_empty() {
    let mut out = Vec::new();
    write_history(&mut out, &History::new()).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Pi History"));
    assert!(!text.contains("Mean"));
}

#[test]
fn test_write_history_entries() {
    let mut history = History::new();
    history.append(3.0, 10);
    history.append(3.5, 20);
    let mut out = Vec::new();
    write_history(&mut out, &history).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("3.5"));
    assert!(text.contains("Mean over 2 runs: 3.250000"));
}

#[test]
fn test_write_json_summary_without_batch() {
    let region = Region::new(0, 10, 0, 10).unwrap();
    let mut out = Vec::new();
    write_json_summary(&mut out, 5, &region, None, &History::new()).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert!(value["last_batch"].is_null());
    assert_eq!(value["region"]["right"], 10);
}
