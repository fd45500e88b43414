//! State-space adapter contract.

use std::marker::PhantomData;

/// A state space the engine can search.
///
/// # Contract
///
/// - `neighbors` is deterministic: the same state always yields the same
///   candidates in the same order. Order is significant; it fixes the
///   explored trace and, for depth- and breadth-first search, the path.
/// - `admits` is the feasibility filter (bounds, obstacles). Candidates it
///   rejects are never offered to the frontier.
/// - Both functions are free of side effects.
pub trait StateSpace {
    /// The state type. `Ord` drives deduplication.
    type State: Clone + Ord;

    /// Candidate successors of `state`, in generation order.
    fn neighbors(&self, state: &Self::State) -> Vec<Self::State>;

    /// Whether a candidate state is admissible. Defaults to accepting all.
    fn admits(&self, _candidate: &Self::State) -> bool {
        true
    }
}

impl<T: StateSpace + ?Sized> StateSpace for &T {
    type State = T::State;

    fn neighbors(&self, state: &Self::State) -> Vec<Self::State> {
        (**self).neighbors(state)
    }

    fn admits(&self, candidate: &Self::State) -> bool {
        (**self).admits(candidate)
    }
}

/// Closure-backed state space for ad-hoc searches.
///
/// ```
/// use wayfinder_search::contract::{FnSpace, StateSpace};
///
/// let space = FnSpace::new(|n: &i32| vec![n - 1, n + 1]).with_filter(|n: &i32| *n >= 0);
/// assert_eq!(space.neighbors(&0), vec![-1, 1]);
/// assert!(!space.admits(&-1));
/// ```
pub struct FnSpace<S, N, P = AcceptAll<S>> {
    neighbors: N,
    filter: P,
    _state: PhantomData<fn(&S)>,
}

/// Filter type of an [`FnSpace`] built without one.
pub type AcceptAll<S> = fn(&S) -> bool;

impl<S, N> FnSpace<S, N>
where
    N: Fn(&S) -> Vec<S>,
{
    pub fn new(neighbors: N) -> Self {
        Self {
            neighbors,
            filter: |_| true,
            _state: PhantomData,
        }
    }
}

impl<S, N, P> FnSpace<S, N, P> {
    /// Replace the feasibility filter.
    pub fn with_filter<Q>(self, filter: Q) -> FnSpace<S, N, Q>
    where
        Q: Fn(&S) -> bool,
    {
        FnSpace {
            neighbors: self.neighbors,
            filter,
            _state: PhantomData,
        }
    }
}

impl<S, N, P> StateSpace for FnSpace<S, N, P>
where
    S: Clone + Ord,
    N: Fn(&S) -> Vec<S>,
    P: Fn(&S) -> bool,
{
    type State = S;

    fn neighbors(&self, state: &S) -> Vec<S> {
        (self.neighbors)(state)
    }

    fn admits(&self, candidate: &S) -> bool {
        (self.filter)(candidate)
    }
}

/// Admissible successors of `state`: generated candidates, in order, that
/// pass the filter.
pub fn admissible_neighbors<W: StateSpace>(space: &W, state: &W::State) -> Vec<W::State> {
    space
        .neighbors(state)
        .into_iter()
        .filter(|c| space.admits(c))
        .collect()
}
