//! Search outcome: explored trace, result path, termination, counters.

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// A popped node's state equalled the goal.
    GoalReached,
    /// The frontier emptied without reaching the goal.
    FrontierExhausted,
    /// The guard stopped the search before the frontier emptied.
    Aborted,
}

impl Termination {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::Aborted => "aborted",
        }
    }
}

/// Aggregate counters for one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from the frontier (the explored trace length).
    pub expansions: u64,
    /// Candidates proposed by the neighbor generator.
    pub generated: u64,
    /// Candidates rejected by the filter.
    pub filtered: u64,
    /// Admissible candidates rejected because they were already visited.
    pub duplicates_suppressed: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
    /// Accumulated cost of the goal node, when reached.
    pub goal_g_score: Option<i64>,
}

impl SearchStats {
    pub(crate) fn observe_frontier(&mut self, len: usize) {
        let len = len as u64;
        if len > self.frontier_high_water {
            self.frontier_high_water = len;
        }
    }

    /// Nodes admitted into the frontier, root included.
    #[must_use]
    pub fn admitted(&self) -> u64 {
        1 + self.generated - self.filtered - self.duplicates_suppressed
    }
}

/// Result of one search call.
///
/// The result path is non-empty exactly when the search is solved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<S> {
    explored: Vec<S>,
    path: Vec<S>,
    termination: Termination,
    stats: SearchStats,
}

impl<S> SearchOutcome<S> {
    pub(crate) fn new(
        explored: Vec<S>,
        path: Vec<S>,
        termination: Termination,
        stats: SearchStats,
    ) -> Self {
        debug_assert_eq!(
            termination == Termination::GoalReached,
            !path.is_empty(),
            "path must be present exactly when the goal was reached"
        );
        Self {
            explored,
            path,
            termination,
            stats,
        }
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.termination == Termination::GoalReached
    }

    /// States in the order they were popped, the goal included.
    #[must_use]
    pub fn explored(&self) -> &[S] {
        &self.explored
    }

    /// Start-to-goal states, present only when solved.
    #[must_use]
    pub fn path(&self) -> Option<&[S]> {
        self.is_solved().then_some(self.path.as_slice())
    }

    /// Number of transitions on the result path.
    #[must_use]
    pub fn steps(&self) -> Option<usize> {
        self.path().map(|p| p.len() - 1)
    }

    #[must_use]
    pub fn termination(&self) -> Termination {
        self.termination
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Split into `(explored, path)`; `path` is empty when unsolved.
    #[must_use]
    pub fn into_parts(self) -> (Vec<S>, Vec<S>) {
        (self.explored, self.path)
    }
}
