//! Command-line surface of the `wayfinder` binary.
//!
//! ```text
//! wayfinder <grid|puzzle> <dfs|bfs|ucs|astar>
//!           [--trace] [--json] [--max-expansions N] [--time-limit-ms N]
//! ```
//!
//! The problem is read from stdin; the report is returned as a string so the
//! binary stays a thin shell around [`execute`].

use std::time::Duration;

use crate::contract::SearchWorld;
use crate::report::{grid_text, puzzle_text, report_digest, report_json};
use crate::runner::{run, Algorithm, RunConfig, RunError, RunReport};
use crate::worlds::grid::GridWorld;
use crate::worlds::puzzle::PuzzleWorld;

pub const USAGE: &str = "usage: wayfinder <grid|puzzle> <dfs|bfs|ucs|astar> \
[--trace] [--json] [--max-expansions N] [--time-limit-ms N]";

/// Problem family read from stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Grid,
    Puzzle,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub domain: Domain,
    pub config: RunConfig,
    /// Include the explored trace in text reports.
    pub trace: bool,
    /// Emit a JSON report with its digest instead of text.
    pub json: bool,
}

fn usage(detail: impl Into<String>) -> RunError {
    RunError::Usage {
        detail: format!("{}\n{USAGE}", detail.into()),
    }
}

fn flag_value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<u64, RunError> {
    let raw = args
        .next()
        .ok_or_else(|| usage(format!("{flag} requires a value")))?;
    raw.parse()
        .map_err(|_| usage(format!("{flag} expects a non-negative integer, got `{raw}`")))
}

impl CliArgs {
    /// Parse arguments (program name excluded).
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Usage`] for missing or unknown arguments and
    /// [`RunError::UnknownAlgorithm`] for an unrecognized algorithm name.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, RunError> {
        let mut args = args.into_iter();

        let domain = match args.next().as_deref() {
            Some("grid") => Domain::Grid,
            Some("puzzle") => Domain::Puzzle,
            Some(other) => return Err(usage(format!("unknown problem `{other}`"))),
            None => return Err(usage("missing problem")),
        };
        let algorithm: Algorithm = args
            .next()
            .ok_or_else(|| usage("missing algorithm"))?
            .parse()?;

        let mut parsed = Self {
            domain,
            config: RunConfig::new(algorithm),
            trace: false,
            json: false,
        };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--trace" => parsed.trace = true,
                "--json" => parsed.json = true,
                "--max-expansions" => {
                    parsed.config.max_expansions = Some(flag_value(&mut args, &arg)?);
                }
                "--time-limit-ms" => {
                    let ms = flag_value(&mut args, &arg)?;
                    parsed.config.time_limit = Some(Duration::from_millis(ms));
                }
                other => return Err(usage(format!("unknown argument `{other}`"))),
            }
        }
        Ok(parsed)
    }
}

/// Parse `input`, run the search and render the report.
///
/// # Errors
///
/// Returns [`RunError`] if the input is invalid, the budgets are rejected,
/// or the JSON report cannot be canonicalized.
pub fn execute(args: &CliArgs, input: &str) -> Result<String, RunError> {
    match args.domain {
        Domain::Grid => {
            let world = GridWorld::parse(input)?;
            let report = run(&world, &args.config)?;
            if args.json {
                return render_json(&world, &report);
            }
            // Uninformed searches list what they explored by default.
            let explored = args.trace
                || matches!(
                    args.config.algorithm,
                    Algorithm::DepthFirst | Algorithm::BreadthFirst
                );
            Ok(grid_text(&report.outcome, explored))
        }
        Domain::Puzzle => {
            let world = PuzzleWorld::parse(input)?;
            let report = run(&world, &args.config)?;
            if args.json {
                return render_json(&world, &report);
            }
            Ok(puzzle_text(&report.outcome, args.trace))
        }
    }
}

fn render_json<W: SearchWorld>(world: &W, report: &RunReport<W::State>) -> Result<String, RunError> {
    let mut value = report_json(world, report);
    let digest = report_digest(&value)?;
    if let Some(object) = value.as_object_mut() {
        object.insert("digest".into(), digest.as_str().into());
        object.insert(
            "elapsed_us".into(),
            u64::try_from(report.elapsed.as_micros())
                .unwrap_or(u64::MAX)
                .into(),
        );
    }
    Ok(format!("{value}\n"))
}
