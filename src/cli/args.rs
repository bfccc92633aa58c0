//! CLI argument parsing.
//!
//! The batch size is kept as raw text so that the run command can reject
//! non-numeric input with the same error the interactive front end uses.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Options for the `run` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Batch size text as typed; `None` uses the configured size.
    pub batch: Option<String>,
    /// Number of consecutive runs.
    pub runs: usize,
    /// Optional seed override.
    pub seed_override: Option<u64>,
    /// Optional configuration file.
    pub config_path: Option<PathBuf>,
    /// Optional override of the points-table row limit.
    pub max_rows: Option<usize>,
    /// Emit JSON instead of tables.
    pub json: bool,
    /// Enable verbose output.
    pub verbose: bool,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run one or more batches and print the results.
    Run(RunOptions),
    /// Validate a configuration file.
    CheckConfig {
        /// Path to the YAML file.
        config_path: PathBuf,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// Accepts any iterator of strings, not just `std::env::args()`.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Whether verbose output was requested.
    #[must_use]
    pub fn verbose(&self) -> bool {
        matches!(&self.command, Command::Run(opts) if opts.verbose)
    }

    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_run_command(&args[2..]),
            "check-config" => Self::parse_check_config_command(args),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the `run` command arguments (everything after `run`).
    fn parse_run_command(rest: &[String]) -> Command {
        let mut opts = RunOptions {
            runs: 1,
            ..RunOptions::default()
        };

        let mut i = 0;
        while i < rest.len() {
            let value = rest.get(i + 1);
            match rest[i].as_str() {
                "--runs" => {
                    match value.map(|v| v.parse::<usize>()) {
                        Some(Ok(n)) if n > 0 => opts.runs = n,
                        _ => {
                            eprintln!("Error: '--runs' requires a positive integer");
                            return Command::Help;
                        }
                    }
                    i += 2;
                }
                "--seed" => {
                    match value.map(|v| v.parse::<u64>()) {
                        Some(Ok(seed)) => opts.seed_override = Some(seed),
                        _ => {
                            eprintln!("Error: '--seed' requires an unsigned integer");
                            return Command::Help;
                        }
                    }
                    i += 2;
                }
                "--config" => {
                    let Some(path) = value else {
                        eprintln!("Error: '--config' requires a file path");
                        return Command::Help;
                    };
                    opts.config_path = Some(PathBuf::from(path));
                    i += 2;
                }
                "--max-rows" => {
                    match value.map(|v| v.parse::<usize>()) {
                        Some(Ok(rows)) => opts.max_rows = Some(rows),
                        _ => {
                            eprintln!("Error: '--max-rows' requires an unsigned integer");
                            return Command::Help;
                        }
                    }
                    i += 2;
                }
                "--json" => {
                    opts.json = true;
                    i += 1;
                }
                "-v" | "--verbose" => {
                    opts.verbose = true;
                    i += 1;
                }
                positional if opts.batch.is_none() => {
                    opts.batch = Some(positional.to_string());
                    i += 1;
                }
                extra => {
                    eprintln!("Warning: ignoring unexpected argument '{extra}'");
                    i += 1;
                }
            }
        }

        Command::Run(opts)
    }

    /// Parse the `check-config` command arguments.
    fn parse_check_config_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'check-config' command requires a config path");
            return Command::Help;
        }

        Command::CheckConfig {
            config_path: PathBuf::from(&args[2]),
        }
    }
}
