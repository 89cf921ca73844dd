//! CLI output formatting.
//!
//! Reports are built as strings so they can be tested; the command layer
//! decides where they go.

use std::fmt::Write;

use serde::Serialize;

use crate::error::LabResult;
use crate::sequence::{SequenceRow, TimingMode};
use crate::tour::{GeneratorTiming, TourReport};

const RULE: &str =
    "------------------------------------------------------------------------------------------";

/// Print version information.
pub fn print_version() {
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => {
            println!("tourlab {} ({hash})", env!("CARGO_PKG_VERSION"));
        }
        _ => println!("tourlab {}", env!("CARGO_PKG_VERSION")),
    }
}

/// Print help message.
pub fn print_help() {
    println!(
        r"tourlab - recurrence timing and constrained point-tour enumeration

USAGE:
    tourlab <COMMAND> [OPTIONS]

COMMANDS:
    sequence                    Compare recursive and iterative F(n)
        -n, --max-n <N>         Evaluate F(1..=N) (default: 15)
        --warm | --cold         Share or reset the recursive cache (default: warm)

    tour [<points.txt>|-]       Enumerate orderings and filter them
        --min-distance <X>      Minimum consecutive spacing (default: 1.5)
        --max-total <Y>         Maximum total length (default: 10.0)
        -g, --generator <G>     build-up | library (default: library)

    compare [<points.txt>|-]    Time both ordering generators
        -i, --iterations <N>    Runs per generator (default: 1000)

    run <config.yaml>           Run everything from a configuration file

    help                        Show this help message
    version                     Show version information

GLOBAL OPTIONS:
    --json                      Emit JSON instead of text
    -v, --verbose               Debug logging (RUST_LOG overrides)

POINTS FORMAT:
    First line: point count K. Then K lines of two numbers, x and y.
    Without a file the built-in sample (1,1) (2,3) (3,2) (4,4) is used.

EXAMPLES:
    tourlab sequence --max-n 20 --cold
    tourlab tour points.txt --generator build-up
    printf '2\n0 0\n3 4\n' | tourlab tour -
    tourlab run tourlab.yaml --json
"
    );
}

/// Render the sequence comparison table.
#[must_use]
pub fn format_sequence_table(rows: &[SequenceRow], mode: TimingMode) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Sequence comparison (recursive cache: {mode})");
    let _ = writeln!(
        out,
        " n | Recursive value      | Iterative value      | Recursive time (s) | Iterative time (s)"
    );
    let _ = writeln!(out, "{RULE}");
    for row in rows {
        let _ = writeln!(
            out,
            "{:2} | {:<20.10} | {:<20.10} | {:.6} | {:.6}",
            row.n, row.recursive, row.iterative, row.recursive_secs, row.iterative_secs
        );
    }
    out
}

/// Render all orderings followed by the retained ones.
#[must_use]
pub fn format_tour_report(report: &TourReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "All orderings ({}) [{}]:",
        report.orderings.len(),
        report.generator
    );
    for path in &report.orderings {
        let _ = writeln!(out, "{path}");
    }

    let _ = writeln!(
        out,
        "\nConstraints: min distance {}, max total distance {}",
        report.constraints.min_distance, report.constraints.max_total_distance
    );
    if report.optimal.is_empty() {
        let _ = writeln!(out, "No optimal orderings found.");
    } else {
        let _ = writeln!(out, "Optimal orderings ({}):", report.optimal.len());
        for (i, scored) in report.optimal.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}) Path: {}, Length: {:.2}",
                i + 1,
                scored.path,
                scored.length
            );
        }
    }
    out
}

/// Render the generator timing comparison.
#[must_use]
pub fn format_generator_timing(timing: &GeneratorTiming) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Orderings per run: {}", timing.orderings);
    let _ = writeln!(out, "Total time over {} runs:", timing.iterations);
    let _ = writeln!(out, "  build-up: {:.6} s", timing.build_up_secs);
    let _ = writeln!(out, "  library:  {:.6} s", timing.library_secs);
    let _ = writeln!(out, "Faster: {}", timing.faster());
    out
}

/// Pretty-printed JSON for any report.
///
/// # Errors
///
/// Returns `LabError::Serialization` if the value cannot be encoded.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> LabResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
