//! Heuristic estimates for best-first search.

/// Estimate of the remaining cost from a state to the goal.
///
/// With [`crate::policy::Strategy::BestFirst`], a node's priority is
/// `g_score + estimate(state)`. An estimate that never exceeds the true
/// remaining step count (admissible) gives A*-style behavior; the constant
/// zero estimate gives uniform-cost search.
pub trait Heuristic<S> {
    fn estimate(&self, state: &S) -> i64;
}

impl<S, F> Heuristic<S> for F
where
    F: Fn(&S) -> i64,
{
    fn estimate(&self, state: &S) -> i64 {
        self(state)
    }
}

/// Default heuristic: every state scores 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<S> Heuristic<S> for ZeroHeuristic {
    fn estimate(&self, _state: &S) -> i64 {
        0
    }
}

/// Scores the goal state 1 and every other state 0.
///
/// This only pushes the goal behind equal-cost siblings; it carries no
/// distance information. It is a stand-in for a real heuristic on unit-cost
/// graphs, not a general-purpose A* estimate.
#[derive(Debug, Clone)]
pub struct GoalIndicator<S> {
    goal: S,
}

impl<S> GoalIndicator<S> {
    #[must_use]
    pub fn new(goal: S) -> Self {
        Self { goal }
    }
}

impl<S: PartialEq> Heuristic<S> for GoalIndicator<S> {
    fn estimate(&self, state: &S) -> i64 {
        i64::from(*state == self.goal)
    }
}
