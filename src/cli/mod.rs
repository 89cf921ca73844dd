//! CLI module for tourlab.
//!
//! All CLI logic lives here rather than in main.rs so it can be tested.
//! The entry point `run_cli` is called from main.rs with parsed arguments.

mod args;
mod commands;
mod output;

pub use args::{Args, Command};
pub use commands::{execute, run_cli};
pub use output::{
    format_generator_timing, format_sequence_table, format_tour_report, print_help,
    print_version, to_json,
};
