//! Search entry points and the traversal loop.

use tracing::{debug, trace};

use crate::contract::StateSpace;
use crate::error::SearchError;
use crate::frontier::{AnyFrontier, FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
use crate::guard::{PolicyGuard, SearchGuard, Unbounded};
use crate::heuristic::{Heuristic, ZeroHeuristic};
use crate::node::{reconstruct_path, NodeRef, SearchNode};
use crate::outcome::{SearchOutcome, SearchStats, Termination};
use crate::policy::SearchPolicy;
use crate::visited::VisitedSet;

/// Run the pop/expand/push loop from `start` toward `goal`.
///
/// This is the single algorithm body behind every strategy; the order in
/// which `frontier` releases nodes decides whether it behaves as DFS, BFS,
/// uniform-cost or A*-style search.
///
/// - `start` is marked visited and pushed as the root.
/// - `guard` is polled once before every pop; `false` aborts the search.
/// - Every popped state is appended to the explored trace, the goal included.
/// - A candidate is pushed only if the filter admits it and it has never been
///   admitted before; it is marked visited at push time. A cheaper route to a
///   state that is already queued is never substituted in.
/// - The result path is rebuilt from the goal node only when the goal was
///   reached.
pub fn traverse<W, F, H, G>(
    space: &W,
    start: W::State,
    goal: &W::State,
    mut frontier: F,
    heuristic: &H,
    guard: &mut G,
) -> SearchOutcome<W::State>
where
    W: StateSpace + ?Sized,
    F: Frontier<W::State>,
    H: Heuristic<W::State> + ?Sized,
    G: SearchGuard + ?Sized,
{
    let mut visited = VisitedSet::new();
    let mut explored = Vec::new();
    let mut stats = SearchStats::default();

    let root = SearchNode::root(start.clone(), heuristic.estimate(&start));
    visited.admit(start);
    frontier.push(root);
    stats.observe_frontier(frontier.len());

    let mut goal_node: Option<NodeRef<W::State>> = None;

    let termination = loop {
        if frontier.is_empty() {
            break Termination::FrontierExhausted;
        }
        if !guard.should_continue() {
            break Termination::Aborted;
        }
        let Some(current) = frontier.pop() else {
            break Termination::FrontierExhausted;
        };

        stats.expansions += 1;
        explored.push(current.state().clone());
        trace!(
            expansion = stats.expansions,
            g_score = current.g_score(),
            total_score = current.total_score(),
            frontier_len = frontier.len(),
            "pop"
        );

        if current.state() == goal {
            goal_node = Some(current);
            break Termination::GoalReached;
        }

        for candidate in space.neighbors(current.state()) {
            stats.generated += 1;
            if !space.admits(&candidate) {
                stats.filtered += 1;
                continue;
            }
            if visited.contains(&candidate) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            let h_score = heuristic.estimate(&candidate);
            visited.admit(candidate.clone());
            frontier.push(SearchNode::child(candidate, &current, h_score));
        }
        stats.observe_frontier(frontier.len());
    };

    let path = match &goal_node {
        Some(node) => {
            stats.goal_g_score = Some(node.g_score());
            reconstruct_path(node)
        }
        None => Vec::new(),
    };

    debug!(
        termination = termination.as_str(),
        expansions = stats.expansions,
        generated = stats.generated,
        filtered = stats.filtered,
        duplicates_suppressed = stats.duplicates_suppressed,
        frontier_high_water = stats.frontier_high_water,
        visited = visited.len(),
        path_len = path.len(),
        "search finished"
    );

    SearchOutcome::new(explored, path, termination, stats)
}

/// Run a search configured by `policy`.
///
/// The frontier is chosen by `policy.strategy`; the policy budgets are
/// enforced through the guard. `heuristic` only affects the order under
/// [`crate::policy::Strategy::BestFirst`].
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
/// Nothing is expanded in that case.
pub fn search<W, H>(
    space: &W,
    start: W::State,
    goal: &W::State,
    heuristic: &H,
    policy: &SearchPolicy,
) -> Result<SearchOutcome<W::State>, SearchError>
where
    W: StateSpace + ?Sized,
    H: Heuristic<W::State> + ?Sized,
{
    search_with_guard(space, start, goal, heuristic, policy, &mut Unbounded)
}

/// [`search`] with an additional caller-supplied guard.
///
/// The policy budgets are polled first; `guard` is only polled while they
/// allow the search to continue.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
pub fn search_with_guard<W, H, G>(
    space: &W,
    start: W::State,
    goal: &W::State,
    heuristic: &H,
    policy: &SearchPolicy,
    guard: &mut G,
) -> Result<SearchOutcome<W::State>, SearchError>
where
    W: StateSpace + ?Sized,
    H: Heuristic<W::State> + ?Sized,
    G: SearchGuard + ?Sized,
{
    policy.validate()?;

    let mut budgets = PolicyGuard::start(policy);
    let mut combined = || budgets.should_continue() && guard.should_continue();
    let frontier = AnyFrontier::for_strategy(policy.strategy);

    debug!(strategy = %policy.strategy, bounded = policy.is_bounded(), "search started");
    Ok(traverse(
        space,
        start,
        goal,
        frontier,
        heuristic,
        &mut combined,
    ))
}

/// Depth-first search (last-in-first-out frontier).
pub fn depth_first<W>(space: &W, start: W::State, goal: &W::State) -> SearchOutcome<W::State>
where
    W: StateSpace + ?Sized,
{
    traverse(
        space,
        start,
        goal,
        LifoFrontier::new(),
        &ZeroHeuristic,
        &mut Unbounded,
    )
}

/// Breadth-first search (first-in-first-out frontier).
pub fn breadth_first<W>(space: &W, start: W::State, goal: &W::State) -> SearchOutcome<W::State>
where
    W: StateSpace + ?Sized,
{
    traverse(
        space,
        start,
        goal,
        FifoFrontier::new(),
        &ZeroHeuristic,
        &mut Unbounded,
    )
}

/// Uniform-cost search: priority frontier with the zero heuristic.
pub fn uniform_cost<W>(space: &W, start: W::State, goal: &W::State) -> SearchOutcome<W::State>
where
    W: StateSpace + ?Sized,
{
    traverse(
        space,
        start,
        goal,
        PriorityFrontier::new(),
        &ZeroHeuristic,
        &mut Unbounded,
    )
}

/// A*-style search: priority frontier ordered by `g_score + heuristic`.
pub fn a_star<W, H>(
    space: &W,
    start: W::State,
    goal: &W::State,
    heuristic: &H,
) -> SearchOutcome<W::State>
where
    W: StateSpace + ?Sized,
    H: Heuristic<W::State> + ?Sized,
{
    traverse(
        space,
        start,
        goal,
        PriorityFrontier::new(),
        heuristic,
        &mut Unbounded,
    )
}
