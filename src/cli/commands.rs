//! CLI command handlers.
//!
//! Each handler returns its rendered output; [`run_cli`] prints it, or prints
//! the error and exits with status 1. Nothing below this boundary panics on
//! bad input.

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use serde::Serialize;

use super::output::{
    format_generator_timing, format_sequence_table, format_tour_report, print_help,
    print_version, to_json,
};
use super::{Args, Command};
use crate::config::LabConfig;
use crate::error::{LabError, LabResult};
use crate::sequence::{compare_strategies, SequenceRow};
use crate::tour::{
    compare_generators, enumerate_tours, load_points, parse_points, Constraints, GeneratorTiming,
    Point, TourReport,
};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
        Command::Invalid => {
            eprintln!("Run 'tourlab help' for usage.");
            ExitCode::from(1)
        }
        command => match execute(&command) {
            Ok(output) => {
                print!("{output}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::debug!("command failed: {e:?}");
                eprintln!("Error: {e}");
                ExitCode::from(1)
            }
        },
    }
}

/// Execute a command and return what it would print.
///
/// # Errors
///
/// Returns the first error hit by the command; no partial output is produced.
pub fn execute(command: &Command) -> LabResult<String> {
    match command {
        Command::Sequence {
            max_n,
            timing,
            json,
        } => {
            let mut builder = LabConfig::builder();
            if let Some(n) = max_n {
                builder = builder.max_n(*n);
            }
            if let Some(mode) = timing {
                builder = builder.timing(*mode);
            }
            let config = builder.build();
            config.check()?;
            run_sequence(&config, *json)
        }
        Command::Tour {
            points_path,
            min_distance,
            max_total_distance,
            generator,
            json,
        } => {
            let defaults = Constraints::default();
            let mut builder = LabConfig::builder()
                .constraints(Constraints::new(
                    min_distance.unwrap_or(defaults.min_distance),
                    max_total_distance.unwrap_or(defaults.max_total_distance),
                ))
                .points(read_points(points_path.as_deref())?);
            if let Some(g) = generator {
                builder = builder.generator(*g);
            }
            let config = builder.build();
            config.check()?;
            run_tour(&config, *json)
        }
        Command::Compare {
            points_path,
            iterations,
            json,
        } => {
            let mut builder = LabConfig::builder().points(read_points(points_path.as_deref())?);
            if let Some(n) = iterations {
                builder = builder.timing_iterations(*n);
            }
            let config = builder.build();
            config.check()?;
            run_compare(&config, *json)
        }
        Command::Run { config_path, json } => run_config(config_path, *json),
        Command::Invalid => Err(LabError::config("invalid command-line arguments")),
        Command::Help | Command::Version => Ok(String::new()),
    }
}

/// Points from a file, stdin (`-`), or the built-in sample.
fn read_points(path: Option<&Path>) -> LabResult<Vec<Point>> {
    match path {
        None => Ok(crate::tour::sample_points()),
        Some(p) if p.as_os_str() == "-" => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            parse_points(&text)
        }
        Some(p) => {
            log::info!("reading points from {}", p.display());
            load_points(p)
        }
    }
}

fn run_sequence(config: &LabConfig, json: bool) -> LabResult<String> {
    let rows = compare_strategies(config.sequence.max_n, config.sequence.timing)?;
    if json {
        to_json(&rows)
    } else {
        Ok(format_sequence_table(&rows, config.sequence.timing))
    }
}

fn run_tour(config: &LabConfig, json: bool) -> LabResult<String> {
    let report = enumerate_tours(
        &config.tour.points,
        &config.tour.constraints(),
        config.tour.generator,
    )?;
    if json {
        to_json(&report)
    } else {
        Ok(format_tour_report(&report))
    }
}

fn run_compare(config: &LabConfig, json: bool) -> LabResult<String> {
    let timing = compare_generators(&config.tour.points, config.tour.timing_iterations)?;
    if json {
        to_json(&timing)
    } else {
        Ok(format_generator_timing(&timing))
    }
}

#[derive(Serialize)]
struct RunReport<'a> {
    sequence: &'a [SequenceRow],
    tour: &'a TourReport,
    generator_timing: &'a GeneratorTiming,
}

/// Run the sequence comparison, the enumeration and the generator timing
/// from one configuration file.
fn run_config(path: &Path, json: bool) -> LabResult<String> {
    log::info!("loading configuration from {}", path.display());
    let config = LabConfig::load(path)?;

    let rows = compare_strategies(config.sequence.max_n, config.sequence.timing)?;
    let report = enumerate_tours(
        &config.tour.points,
        &config.tour.constraints(),
        config.tour.generator,
    )?;
    let timing = compare_generators(&config.tour.points, config.tour.timing_iterations)?;

    if json {
        return to_json(&RunReport {
            sequence: &rows,
            tour: &report,
            generator_timing: &timing,
        });
    }

    Ok(format!(
        "{}\n{}\n{}",
        format_sequence_table(&rows, config.sequence.timing),
        format_tour_report(&report),
        format_generator_timing(&timing)
    ))
}
