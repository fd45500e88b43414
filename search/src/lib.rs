//! Wayfinder Search: one traversal loop, pluggable frontier strategies.
//!
//! Depth-first, breadth-first, uniform-cost and A*-style search share a
//! single pop/expand/push body ([`search::traverse`]); only the frontier
//! discipline differs.
//!
//! # Key types
//!
//! - [`contract::StateSpace`]: adapter trait: ordered neighbors + filter
//! - [`node::SearchNode`]: state with shared parent reference and scores
//! - [`frontier::Frontier`]: LIFO / FIFO / priority frontiers
//! - [`visited::VisitedSet`]: visited-on-generation deduplication
//! - [`heuristic::Heuristic`]: remaining-cost estimate (zero by default)
//! - [`guard::SearchGuard`]: per-pop early-termination predicate
//! - [`policy::SearchPolicy`]: strategy selection and budgets
//! - [`outcome::SearchOutcome`]: explored trace, path, termination, stats
//!
//! ```
//! use wayfinder_search::contract::FnSpace;
//! use wayfinder_search::search::breadth_first;
//!
//! let line = FnSpace::new(|n: &i32| vec![n - 1, n + 1]).with_filter(|n: &i32| (0..=9).contains(n));
//! let outcome = breadth_first(&line, 2, &6);
//! assert_eq!(outcome.path(), Some(&[2, 3, 4, 5, 6][..]));
//! ```

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod guard;
pub mod heuristic;
pub mod node;
pub mod outcome;
pub mod policy;
pub mod search;
pub mod visited;
