//! `wayfinder`: solve a grid maze or sliding puzzle read from stdin.
//!
//! Usage: see [`wayfinder_harness::cli::USAGE`]. Logs go to stderr and are
//! controlled by `RUST_LOG` (default `wayfinder=warn`).

use std::io::Read;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use wayfinder_harness::cli::{execute, CliArgs};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wayfinder=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    let mut input = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("failed to read stdin: {err}");
        return ExitCode::FAILURE;
    }

    match execute(&args, &input) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
