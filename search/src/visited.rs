//! Visited set: states already admitted into the frontier.
//!
//! Uses `BTreeSet` (not `HashSet`) so states only need a total order.

use std::collections::BTreeSet;

/// States admitted during one search. Grows monotonically; never shrinks.
#[derive(Debug, Clone)]
pub struct VisitedSet<S> {
    states: BTreeSet<S>,
}

impl<S: Ord> VisitedSet<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: BTreeSet::new(),
        }
    }

    /// Mark `state` as visited.
    ///
    /// Returns `false` if it was already present (first admission wins).
    pub fn admit(&mut self, state: S) -> bool {
        self.states.insert(state)
    }

    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<S: Ord> Default for VisitedSet<S> {
    fn default() -> Self {
        Self::new()
    }
}
