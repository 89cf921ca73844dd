//! tourlab CLI
//!
//! Command-line interface for the sequence and tour exercises.

use std::process::ExitCode;

use tourlab::cli::{run_cli, Args};

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    run_cli(args)
}
