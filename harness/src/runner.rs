//! Harness runner: drives one world through the search engine.
//!
//! The runner owns algorithm selection and timing. It does not implement
//! search itself; it picks a strategy and heuristic and delegates to
//! [`wayfinder_search::search::search`].
//!
//! # Pipeline
//!
//! ```text
//! RunConfig::policy() → validate → search(world, start, goal) → RunReport
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{info, info_span};

use wayfinder_search::error::SearchError;
use wayfinder_search::heuristic::ZeroHeuristic;
use wayfinder_search::outcome::SearchOutcome;
use wayfinder_search::policy::{SearchPolicy, Strategy};
use wayfinder_search::search::search;

use crate::contract::{SearchWorld, WorldError, WorldHeuristic};
use crate::report::ReportError;

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    /// The world input was rejected.
    #[error(transparent)]
    World(#[from] WorldError),

    /// The search policy was rejected before any expansion.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// The report could not be rendered.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// An algorithm name did not match any known algorithm.
    #[error("unknown algorithm `{name}` (expected dfs, bfs, ucs or astar)")]
    UnknownAlgorithm { name: String },

    /// Command-line arguments were malformed.
    #[error("{detail}")]
    Usage { detail: String },
}

/// The four search algorithms the harness exposes.
///
/// Uniform-cost and A* share the best-first strategy; they differ only in
/// the heuristic handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    DepthFirst,
    #[default]
    BreadthFirst,
    UniformCost,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Self::DepthFirst,
        Self::BreadthFirst,
        Self::UniformCost,
        Self::AStar,
    ];

    #[must_use]
    pub fn strategy(self) -> Strategy {
        match self {
            Self::DepthFirst => Strategy::DepthFirst,
            Self::BreadthFirst => Strategy::BreadthFirst,
            Self::UniformCost | Self::AStar => Strategy::BestFirst,
        }
    }

    /// Whether the world's domain heuristic is used (otherwise zero).
    #[must_use]
    pub fn uses_heuristic(self) -> bool {
        matches!(self, Self::AStar)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
            Self::UniformCost => "ucs",
            Self::AStar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = RunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth_first" => Ok(Self::DepthFirst),
            "bfs" | "breadth_first" => Ok(Self::BreadthFirst),
            "ucs" | "uniform_cost" => Ok(Self::UniformCost),
            "astar" | "a_star" | "a*" => Ok(Self::AStar),
            _ => Err(RunError::UnknownAlgorithm { name: s.to_string() }),
        }
    }
}

/// Run configuration: algorithm plus optional budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunConfig {
    pub algorithm: Algorithm,
    pub max_expansions: Option<u64>,
    pub time_limit: Option<Duration>,
}

impl RunConfig {
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// The engine policy this configuration maps to.
    #[must_use]
    pub fn policy(&self) -> SearchPolicy {
        SearchPolicy {
            strategy: self.algorithm.strategy(),
            max_expansions: self.max_expansions,
            time_limit: self.time_limit,
        }
    }
}

/// One completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport<S> {
    pub world_id: String,
    pub algorithm: Algorithm,
    pub outcome: SearchOutcome<S>,
    /// Wall-clock time spent inside the engine.
    pub elapsed: Duration,
}

/// Run `world` from its start to its goal under `config`.
///
/// # Errors
///
/// Returns [`RunError::Search`] if the configured policy is invalid.
pub fn run<W: SearchWorld>(world: &W, config: &RunConfig) -> Result<RunReport<W::State>, RunError> {
    let span = info_span!(
        "run",
        world = world.world_id(),
        algorithm = config.algorithm.as_str()
    );
    let _entered = span.enter();

    let policy = config.policy();
    let goal = world.goal();
    let started = Instant::now();
    let outcome = if config.algorithm.uses_heuristic() {
        search(world, world.start(), &goal, &WorldHeuristic(world), &policy)?
    } else {
        search(world, world.start(), &goal, &ZeroHeuristic, &policy)?
    };
    let elapsed = started.elapsed();

    info!(
        termination = outcome.termination().as_str(),
        expansions = outcome.stats().expansions,
        steps = outcome.steps(),
        elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        "run finished"
    );

    Ok(RunReport {
        world_id: world.world_id().to_string(),
        algorithm: config.algorithm,
        outcome,
        elapsed,
    })
}
