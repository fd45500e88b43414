//! World contract: what a problem domain supplies to the runner.
//!
//! A world is a [`StateSpace`] plus a fixed start and goal, a domain
//! heuristic, and a JSON rendering of its states. Worlds validate their own
//! input; the engine assumes `start` and `goal` are legal states.

use wayfinder_search::contract::StateSpace;
use wayfinder_search::heuristic::Heuristic;

use thiserror::Error;

/// Typed failure for world construction and input parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    /// The input ended before a required field.
    #[error("unexpected end of input: expected {expected}")]
    MissingField { expected: &'static str },

    /// A numeric field did not parse.
    #[error("invalid {field}: `{raw}` is not a valid number")]
    InvalidNumber { field: &'static str, raw: String },

    /// The grid body does not match the declared dimensions.
    #[error("grid shape mismatch: {detail}")]
    GridShape { detail: String },

    /// A named endpoint lies outside the grid.
    #[error("{which} cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        which: &'static str,
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },

    /// A named endpoint is a wall.
    #[error("{which} cell ({row}, {col}) is a wall")]
    Blocked {
        which: &'static str,
        row: i64,
        col: i64,
    },

    /// The puzzle board size is unsupported.
    #[error("board size {size} is out of range (1..={max})")]
    BoardSize { size: usize, max: usize },

    /// The puzzle tiles are not a permutation of `0..size*size`.
    #[error("board tiles are not a permutation of 0..{cells}: {detail}")]
    NotAPermutation { cells: usize, detail: String },

    /// The puzzle cannot reach the goal arrangement.
    #[error("board is unsolvable: tile parity does not match blank distance")]
    Unsolvable,

    /// Trailing tokens after a complete problem.
    #[error("unexpected trailing input: `{token}`")]
    TrailingInput { token: String },
}

/// The contract a world must implement to be run by the harness runner.
///
/// # Contract
///
/// - `start` and `goal` are valid states of the space (checked at
///   construction).
/// - `estimate` never exceeds the true remaining step count, so best-first
///   search with it is A*-style.
/// - `state_json` is deterministic and uses integers only.
pub trait SearchWorld: StateSpace {
    /// Stable identifier (e.g., `"grid"`).
    fn world_id(&self) -> &str;

    fn start(&self) -> Self::State;

    fn goal(&self) -> Self::State;

    /// Domain heuristic: admissible estimate of the steps left to the goal.
    fn estimate(&self, state: &Self::State) -> i64;

    /// JSON rendering of one state for reports.
    fn state_json(&self, state: &Self::State) -> serde_json::Value;
}

/// Adapts a world's domain estimate to the engine's [`Heuristic`] trait.
pub struct WorldHeuristic<'a, W: ?Sized>(pub &'a W);

impl<W: SearchWorld + ?Sized> Heuristic<W::State> for WorldHeuristic<'_, W> {
    fn estimate(&self, state: &W::State) -> i64 {
        self.0.estimate(state)
    }
}

/// Whitespace-separated token reader shared by the text input parsers.
pub(crate) struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace(),
        }
    }

    pub(crate) fn next_str(&mut self, expected: &'static str) -> Result<&'a str, WorldError> {
        self.inner.next().ok_or(WorldError::MissingField { expected })
    }

    pub(crate) fn next_num<T: std::str::FromStr>(
        &mut self,
        field: &'static str,
    ) -> Result<T, WorldError> {
        let raw = self.next_str(field)?;
        raw.parse().map_err(|_| WorldError::InvalidNumber {
            field,
            raw: raw.to_string(),
        })
    }

    pub(crate) fn finish(mut self) -> Result<(), WorldError> {
        match self.inner.next() {
            Some(token) => Err(WorldError::TrailingInput {
                token: token.to_string(),
            }),
            None => Ok(()),
        }
    }
}
