//! Frontier strategies.
//!
//! The traversal engine only sees the [`Frontier`] trait. Swapping the
//! concrete frontier changes the search order without touching the loop:
//!
//! | Frontier | Removal order | Search |
//! |---|---|---|
//! | [`LifoFrontier`] | most recently pushed | depth-first |
//! | [`FifoFrontier`] | oldest pushed | breadth-first |
//! | [`PriorityFrontier`] | lowest `total_score` | uniform-cost / A* |

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use crate::node::NodeRef;
use crate::policy::Strategy;

/// An ordered collection of pending nodes.
pub trait Frontier<S> {
    /// Queue a node for expansion.
    fn push(&mut self, node: NodeRef<S>);

    /// Remove the next node in strategy order.
    fn pop(&mut self) -> Option<NodeRef<S>>;

    /// Number of pending nodes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last-in-first-out frontier (depth-first search).
#[derive(Debug)]
pub struct LifoFrontier<S> {
    stack: Vec<NodeRef<S>>,
}

impl<S> LifoFrontier<S> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<S> Default for LifoFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Frontier<S> for LifoFrontier<S> {
    fn push(&mut self, node: NodeRef<S>) {
        self.stack.push(node);
    }

    fn pop(&mut self) -> Option<NodeRef<S>> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// First-in-first-out frontier (breadth-first search).
#[derive(Debug)]
pub struct FifoFrontier<S> {
    queue: VecDeque<NodeRef<S>>,
}

impl<S> FifoFrontier<S> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<S> Default for FifoFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Frontier<S> for FifoFrontier<S> {
    fn push(&mut self, node: NodeRef<S>) {
        self.queue.push_back(node);
    }

    fn pop(&mut self) -> Option<NodeRef<S>> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Priority ordering key: `(total_score, insertion_seq)`.
///
/// Lower total score first; ties go to the node pushed earliest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PriorityKey {
    pub total_score: i64,
    pub insertion_seq: u64,
}

/// A heap entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse` to pop the
/// lowest key first.
#[derive(Debug)]
struct PriorityEntry<S> {
    key: Reverse<PriorityKey>,
    node: NodeRef<S>,
}

impl<S> PartialEq for PriorityEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S> Eq for PriorityEntry<S> {}

impl<S> PartialOrd for PriorityEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for PriorityEntry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority frontier keyed on `total_score` (uniform-cost / A*).
///
/// Insertion sequence numbers are unique per frontier, so the heap order is
/// total and pop order is reproducible.
#[derive(Debug)]
pub struct PriorityFrontier<S> {
    heap: BinaryHeap<PriorityEntry<S>>,
    next_seq: u64,
}

impl<S> PriorityFrontier<S> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Key of the node that would be popped next.
    #[must_use]
    pub fn peek_key(&self) -> Option<PriorityKey> {
        self.heap.peek().map(|e| e.key.0)
    }
}

impl<S> Default for PriorityFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Frontier<S> for PriorityFrontier<S> {
    fn push(&mut self, node: NodeRef<S>) {
        let key = PriorityKey {
            total_score: node.total_score(),
            insertion_seq: self.next_seq,
        };
        self.next_seq += 1;
        self.heap.push(PriorityEntry {
            key: Reverse(key),
            node,
        });
    }

    fn pop(&mut self) -> Option<NodeRef<S>> {
        self.heap.pop().map(|e| e.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Runtime-selected frontier: one variant per [`Strategy`].
#[derive(Debug)]
pub enum AnyFrontier<S> {
    Lifo(LifoFrontier<S>),
    Fifo(FifoFrontier<S>),
    Priority(PriorityFrontier<S>),
}

impl<S> AnyFrontier<S> {
    /// Build the empty frontier that realizes `strategy`.
    #[must_use]
    pub fn for_strategy(strategy: Strategy) -> Self {
        match strategy {
            Strategy::DepthFirst => Self::Lifo(LifoFrontier::new()),
            Strategy::BreadthFirst => Self::Fifo(FifoFrontier::new()),
            Strategy::BestFirst => Self::Priority(PriorityFrontier::new()),
        }
    }
}

impl<S> Frontier<S> for AnyFrontier<S> {
    fn push(&mut self, node: NodeRef<S>) {
        match self {
            Self::Lifo(f) => f.push(node),
            Self::Fifo(f) => f.push(node),
            Self::Priority(f) => f.push(node),
        }
    }

    fn pop(&mut self) -> Option<NodeRef<S>> {
        match self {
            Self::Lifo(f) => f.pop(),
            Self::Fifo(f) => f.pop(),
            Self::Priority(f) => f.pop(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Lifo(f) => f.len(),
            Self::Fifo(f) => f.len(),
            Self::Priority(f) => f.len(),
        }
    }
}
