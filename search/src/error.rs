//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. An unreachable goal is
//! not an error: it is reported through [`crate::outcome::Termination`].

use thiserror::Error;

/// Typed failure for pre-flight search validation.
///
/// Returned before any node is expanded; no outcome is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A policy field holds a value the engine cannot honor.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },

    /// A strategy name did not match any known strategy.
    #[error("unknown search strategy `{name}` (expected depth_first, breadth_first or best_first)")]
    UnknownStrategy { name: String },
}
