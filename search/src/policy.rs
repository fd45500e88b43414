//! Search policy types.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::SearchError;

/// Frontier discipline, and therefore the search algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Last-in-first-out frontier.
    DepthFirst,
    /// First-in-first-out frontier.
    BreadthFirst,
    /// Lowest `total_score` first. Uniform-cost with the zero heuristic,
    /// A*-style with an admissible one.
    BestFirst,
}

impl Strategy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DepthFirst => "depth_first",
            Self::BreadthFirst => "breadth_first",
            Self::BestFirst => "best_first",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    /// Accepts [`Strategy::as_str`] names and the `dfs` / `bfs` / `best`
    /// abbreviations, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth_first" => Ok(Self::DepthFirst),
            "bfs" | "breadth_first" => Ok(Self::BreadthFirst),
            "best" | "best_first" => Ok(Self::BestFirst),
            _ => Err(SearchError::UnknownStrategy { name: s.to_string() }),
        }
    }
}

/// Strategy plus optional budgets for one search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    pub strategy: Strategy,
    /// Hard cap on frontier pops. `None` = unbounded.
    pub max_expansions: Option<u64>,
    /// Wall-clock budget measured from the start of the call.
    pub time_limit: Option<Duration>,
}

impl SearchPolicy {
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    /// Reject budgets that would stop the search before the root is popped.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for a zero expansion budget or a
    /// zero time limit.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        if self.time_limit.is_some_and(|t| t.is_zero()) {
            return Err(SearchError::InvalidPolicy {
                detail: "time_limit must be non-zero".into(),
            });
        }
        Ok(())
    }

    /// Whether any budget is configured.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.max_expansions.is_some() || self.time_limit.is_some()
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            strategy: Strategy::BreadthFirst,
            max_expansions: None,
            time_limit: None,
        }
    }
}
