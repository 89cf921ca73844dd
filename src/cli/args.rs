//! CLI argument parsing.
//!
//! Hand-rolled so that parsing is testable from any iterator of strings.
//! Option values are kept as `Option`s; anything left unset falls back to
//! the [`LabConfig`](crate::config::LabConfig) defaults.

use std::path::PathBuf;
use std::str::FromStr;

use crate::sequence::TimingMode;
use crate::tour::Generator;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
    /// Raise the log level to debug.
    pub verbose: bool,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Compare the two sequence strategies.
    Sequence {
        /// Largest index evaluated.
        max_n: Option<u64>,
        /// Cache treatment between measurements.
        timing: Option<TimingMode>,
        /// Emit JSON instead of a table.
        json: bool,
    },
    /// Enumerate and filter orderings.
    Tour {
        /// Points file in the `K` + rows format, `-` for stdin.
        points_path: Option<PathBuf>,
        /// Minimum consecutive spacing.
        min_distance: Option<f64>,
        /// Maximum total length.
        max_total_distance: Option<f64>,
        /// Ordering generator.
        generator: Option<Generator>,
        /// Emit JSON instead of text.
        json: bool,
    },
    /// Time both ordering generators.
    Compare {
        /// Points file in the `K` + rows format, `-` for stdin.
        points_path: Option<PathBuf>,
        /// Repetitions per generator.
        iterations: Option<u32>,
        /// Emit JSON instead of text.
        json: bool,
    },
    /// Run everything from a YAML configuration.
    Run {
        /// Path to the configuration file.
        config_path: PathBuf,
        /// Emit JSON instead of text.
        json: bool,
    },
    /// Arguments that could not be parsed; the reason was already reported.
    Invalid,
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// This method is testable as it accepts any iterator of strings,
    /// not just `std::env::args()`.
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

    fn parse_from_vec(args: &[String]) -> Self {
        let verbose = args
            .iter()
            .skip(1)
            .any(|a| a == "-v" || a == "--verbose");

        if args.len() < 2 {
            return Self {
                command: Command::Help,
                verbose,
            };
        }

        let rest = &args[2..];
        let command = match args[1].as_str() {
            "sequence" | "seq" => Self::parse_sequence_command(rest),
            "tour" => Self::parse_tour_command(rest),
            "compare" => Self::parse_compare_command(rest),
            "run" => Self::parse_run_command(rest),
            "-h" | "--help" | "help" => Some(Command::Help),
            "-V" | "--version" | "version" => Some(Command::Version),
            unknown => {
                eprintln!("Unknown command: {unknown}");
                None
            }
        };

        Self {
            command: command.unwrap_or(Command::Invalid),
            verbose,
        }
    }

    fn parse_sequence_command(rest: &[String]) -> Option<Command> {
        let mut max_n = None;
        let mut timing = None;
        let mut json = false;

        let mut i = 0;
        while i < rest.len() {
            match rest[i].as_str() {
                "--max-n" | "-n" => {
                    max_n = Some(option_value(rest, i)?);
                    i += 2;
                }
                "--timing" => {
                    timing = Some(option_value(rest, i)?);
                    i += 2;
                }
                "--warm" => {
                    timing = Some(TimingMode::Warm);
                    i += 1;
                }
                "--cold" => {
                    timing = Some(TimingMode::Cold);
                    i += 1;
                }
                "--json" => {
                    json = true;
                    i += 1;
                }
                "-v" | "--verbose" => i += 1,
                unknown => return unknown_option(unknown),
            }
        }

        Some(Command::Sequence {
            max_n,
            timing,
            json,
        })
    }

    fn parse_tour_command(rest: &[String]) -> Option<Command> {
        let mut points_path = None;
        let mut min_distance = None;
        let mut max_total_distance = None;
        let mut generator = None;
        let mut json = false;

        let mut i = 0;
        while i < rest.len() {
            match rest[i].as_str() {
                "--min-distance" => {
                    min_distance = Some(option_value(rest, i)?);
                    i += 2;
                }
                "--max-total" | "--max-total-distance" => {
                    max_total_distance = Some(option_value(rest, i)?);
                    i += 2;
                }
                "--generator" | "-g" => {
                    generator = Some(option_value(rest, i)?);
                    i += 2;
                }
                "--json" => {
                    json = true;
                    i += 1;
                }
                "-v" | "--verbose" => i += 1,
                flag if flag.len() > 1 && flag.starts_with('-') => return unknown_option(flag),
                positional => {
                    if points_path.is_none() {
                        points_path = Some(PathBuf::from(positional));
                    }
                    i += 1;
                }
            }
        }

        Some(Command::Tour {
            points_path,
            min_distance,
            max_total_distance,
            generator,
            json,
        })
    }

    fn parse_compare_command(rest: &[String]) -> Option<Command> {
        let mut points_path = None;
        let mut iterations = None;
        let mut json = false;

        let mut i = 0;
        while i < rest.len() {
            match rest[i].as_str() {
                "--iterations" | "-i" => {
                    iterations = Some(option_value(rest, i)?);
                    i += 2;
                }
                "--json" => {
                    json = true;
                    i += 1;
                }
                "-v" | "--verbose" => i += 1,
                flag if flag.len() > 1 && flag.starts_with('-') => return unknown_option(flag),
                positional => {
                    if points_path.is_none() {
                        points_path = Some(PathBuf::from(positional));
                    }
                    i += 1;
                }
            }
        }

        Some(Command::Compare {
            points_path,
            iterations,
            json,
        })
    }

    fn parse_run_command(rest: &[String]) -> Option<Command> {
        if let Some(flag) = rest
            .iter()
            .find(|a| a.starts_with('-') && !matches!(a.as_str(), "--json" | "-v" | "--verbose"))
        {
            return unknown_option(flag);
        }
        let Some(path) = rest.iter().find(|a| !a.starts_with('-')) else {
            eprintln!("Error: 'run' command requires a configuration path");
            return None;
        };

        Some(Command::Run {
            config_path: PathBuf::from(path),
            json: rest.iter().any(|a| a == "--json"),
        })
    }
}

fn unknown_option(flag: &str) -> Option<Command> {
    eprintln!("Error: unknown option '{flag}'");
    None
}

/// Parse the value following the flag at `rest[i]`, reporting why it failed.
fn option_value<T>(rest: &[String], i: usize) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let flag = &rest[i];
    let Some(raw) = rest.get(i + 1) else {
        eprintln!("Error: '{flag}' requires a value");
        return None;
    };
    match raw.parse() {
        Ok(v) => Some(v),
        Err(e) => {
            eprintln!("Error: invalid value '{raw}' for '{flag}': {e}");
            None
        }
    }
}
