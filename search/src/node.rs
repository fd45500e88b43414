//! Search nodes with shared ancestry.
//!
//! A node is jointly owned by the frontier while queued, by every child that
//! names it as parent, and by the engine while it is being expanded. Ancestry
//! is therefore held through [`NodeRef`] (`Rc`), never through a single owner.

use std::rc::Rc;

/// Shared handle to a [`SearchNode`].
pub type NodeRef<S> = Rc<SearchNode<S>>;

/// Cost of a single transition. Every edge in a state space has unit cost.
pub const STEP_COST: i64 = 1;

/// A state plus the bookkeeping needed to rebuild the path that reached it.
///
/// Invariants:
/// - the root has no parent and `g_score == 0`;
/// - every other node has `g_score == parent.g_score + STEP_COST`.
#[derive(Debug)]
pub struct SearchNode<S> {
    state: S,
    parent: Option<NodeRef<S>>,
    g_score: i64,
    h_score: i64,
}

impl<S> SearchNode<S> {
    /// Create the root node of a search tree.
    #[must_use]
    pub fn root(state: S, h_score: i64) -> NodeRef<S> {
        Rc::new(Self {
            state,
            parent: None,
            g_score: 0,
            h_score,
        })
    }

    /// Create a child of `parent`, one step further from the root.
    #[must_use]
    pub fn child(state: S, parent: &NodeRef<S>, h_score: i64) -> NodeRef<S> {
        Rc::new(Self {
            state,
            parent: Some(Rc::clone(parent)),
            g_score: parent.g_score.saturating_add(STEP_COST),
            h_score,
        })
    }

    /// The state this node wraps.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The node this one was generated from; `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<&NodeRef<S>> {
        self.parent.as_ref()
    }

    /// Accumulated cost from the root.
    #[must_use]
    pub fn g_score(&self) -> i64 {
        self.g_score
    }

    /// Heuristic estimate of the remaining cost (0 when no heuristic is used).
    #[must_use]
    pub fn h_score(&self) -> i64 {
        self.h_score
    }

    /// `g_score + h_score`, the priority ordering key.
    #[must_use]
    pub fn total_score(&self) -> i64 {
        self.g_score.saturating_add(self.h_score)
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Iterate from this node up to and including the root.
    pub fn ancestry(&self) -> Ancestry<'_, S> {
        Ancestry { next: Some(self) }
    }
}

/// Iterator over a node and its ancestors, nearest first.
pub struct Ancestry<'a, S> {
    next: Option<&'a SearchNode<S>>,
}

impl<'a, S> Iterator for Ancestry<'a, S> {
    type Item = &'a SearchNode<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}

impl<S> Drop for SearchNode<S> {
    // Unlink the parent chain iteratively; the default recursive drop
    // overflows the stack on very deep paths.
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(node) = parent {
            match Rc::try_unwrap(node) {
                Ok(mut owned) => parent = owned.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// Collect the states from the root down to `node`.
///
/// The returned path starts with the root state and ends with `node`'s state.
#[must_use]
pub fn reconstruct_path<S: Clone>(node: &SearchNode<S>) -> Vec<S> {
    let mut path: Vec<S> = node.ancestry().map(|n| n.state.clone()).collect();
    path.reverse();
    path
}
